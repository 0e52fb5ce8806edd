use crate::byte_size::ByteSize;
use crate::errors::ByteSizeError;
use crate::units::Unit;

/// Parses a byte size string such as `"1024B"`, `"1 MB"` or `"3 petabytes"`.
///
/// The input is a number immediately or whitespace-separated followed by a
/// unit name. Unit names are matched without regard to case. Only a single
/// number and unit pair is accepted, so `"1KB 1023B"` is rejected.
///
/// # Errors
///
/// * [`ByteSizeError::MissingUnit`] if the input is a bare number or empty
/// * [`ByteSizeError::UnrecognizedUnit`] if the unit suffix is unknown
/// * [`ByteSizeError::MalformedNumber`] if the number cannot be read, or is signed
/// * [`ByteSizeError::Overflow`] if the result does not fit in an `f64`
///
/// # Examples
///
/// ```
/// use ferris_bytesize::{parse, ByteSize};
///
/// assert_eq!(parse("1024 GB").unwrap(), ByteSize::TB);
/// assert_eq!(parse(" 1 b ").unwrap(), ByteSize::new(1.0));
/// assert!(parse("1").is_err());
/// ```
pub fn parse(input: &str) -> Result<ByteSize, ByteSizeError> {
    match parse_inner(input) {
        Ok(size) => {
            log::trace!("parsed {:?} as {} bytes", input, size.get());
            Ok(size)
        }
        Err(e) => {
            log::debug!("rejected byte size {:?}: {}", input, e);
            Err(e)
        }
    }
}

fn parse_inner(input: &str) -> Result<ByteSize, ByteSizeError> {
    let trimmed = input.trim();

    let (num_part, unit_part) = split_number(trimmed).ok_or(ByteSizeError::MissingUnit)?;

    let unit = Unit::from_alias(unit_part)
        .ok_or_else(|| ByteSizeError::UnrecognizedUnit(unit_part.to_string()))?;

    if num_part.starts_with(['+', '-']) {
        return Err(ByteSizeError::MalformedNumber {
            input: num_part.to_string(),
            source: None,
        });
    }

    let value: f64 = num_part.parse().map_err(|e| ByteSizeError::MalformedNumber {
        input: num_part.to_string(),
        source: Some(e),
    })?;

    let bytes = value * unit.multiplier();
    if !bytes.is_finite() {
        return Err(ByteSizeError::Overflow(trimmed.to_string()));
    }

    Ok(ByteSize::new(bytes))
}

/// Splits at the first character that cannot belong to the number.
///
/// A leading sign is kept with the number so it can be rejected there rather
/// than being reported as part of the unit. Returns `None` when nothing
/// follows the number.
fn split_number(s: &str) -> Option<(&str, &str)> {
    let sign_len = if s.starts_with(['+', '-']) { 1 } else { 0 };
    let idx = s[sign_len..]
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .map(|i| i + sign_len)?;

    let (num, unit) = s.split_at(idx);
    Some((num.trim(), unit.trim()))
}
