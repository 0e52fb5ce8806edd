use std::fmt;
use std::str::FromStr;

use crate::byte_size::ByteSize;
use crate::config::FormatConfig;
use crate::errors::ByteSizeError;
use crate::units::Unit;

/// Template controlling how the scaled number is written.
///
/// Templates use a small subset of printf syntax: literal text around exactly
/// one `%[width][.precision]f` conversion, with `%%` for a literal percent sign.
/// The unit label is appended directly after the template output, so a
/// trailing space in the template separates number and unit.
///
/// # Examples
///
/// ```
/// use ferris_bytesize::NumberFormat;
///
/// let spaced: NumberFormat = "%.0f ".parse().unwrap();
/// assert_eq!(spaced.render(1.6), "2 ");
/// assert_eq!(NumberFormat::default().render(1.0), "1.00");
/// assert!("%d".parse::<NumberFormat>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    prefix: String,
    width: usize,
    precision: usize,
    suffix: String,
}

impl NumberFormat {
    /// printf's precision when a conversion gives none.
    pub const DEFAULT_PRECISION: usize = 6;

    /// Largest width or precision `std::fmt` accepts.
    pub const MAX_FIELD: usize = u16::MAX as usize;

    /// A bare `%.<precision>f` template.
    ///
    /// Precision is capped at [`NumberFormat::MAX_FIELD`].
    pub const fn with_precision(precision: usize) -> Self {
        Self {
            prefix: String::new(),
            width: 0,
            precision: if precision > Self::MAX_FIELD {
                Self::MAX_FIELD
            } else {
                precision
            },
            suffix: String::new(),
        }
    }

    /// Replaces the text written after the number.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replaces the text written before the number.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Minimum width of the number, right aligned with spaces.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.min(Self::MAX_FIELD);
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Replaces the number of decimals.
    pub fn decimals(mut self, precision: usize) -> Self {
        self.precision = precision.min(Self::MAX_FIELD);
        self
    }

    /// Writes `value` through the template.
    pub fn render(&self, value: f64) -> String {
        self.surround(&self.render_number(value))
    }

    fn render_number(&self, value: f64) -> String {
        format!(
            "{:>width$.precision$}",
            value,
            width = self.width,
            precision = self.precision
        )
    }

    fn surround(&self, number: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(number);
        out.push_str(&self.suffix);
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::with_precision(2)
    }
}

impl FromStr for NumberFormat {
    type Err = ByteSizeError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        let invalid = || ByteSizeError::InvalidFormat(template.to_string());

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion: Option<(usize, usize)> = None;

        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                if conversion.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                if conversion.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }

            if conversion.is_some() {
                return Err(invalid());
            }

            let mut width = String::new();
            while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                width.push(d);
            }

            let mut precision = None;
            if chars.next_if_eq(&'.').is_some() {
                let mut digits = String::new();
                while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                    digits.push(d);
                }
                // "%.f" means zero decimals, as in printf.
                precision = Some(if digits.is_empty() {
                    0
                } else {
                    digits.parse().map_err(|_| invalid())?
                });
            }

            if chars.next() != Some('f') {
                return Err(invalid());
            }

            let width = if width.is_empty() {
                0
            } else {
                width.parse().map_err(|_| invalid())?
            };
            let precision = precision.unwrap_or(Self::DEFAULT_PRECISION);
            if width > Self::MAX_FIELD || precision > Self::MAX_FIELD {
                return Err(invalid());
            }
            conversion = Some((width, precision));
        }

        let (width, precision) = conversion.ok_or_else(invalid)?;
        Ok(Self {
            prefix,
            width,
            precision,
            suffix,
        })
    }
}

impl fmt::Display for NumberFormat {
    /// Writes the template back out in printf form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix.replace('%', "%%"))?;
        f.write_str("%")?;
        if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        write!(f, ".{}f", self.precision)?;
        f.write_str(&self.suffix.replace('%', "%%"))
    }
}

/// Formats byte sizes with one fixed configuration.
///
/// Unlike `ByteSize`'s `Display`, a `Formatter` never consults the
/// process-wide default, so threads holding different formatters cannot
/// affect each other.
///
/// # Examples
///
/// ```
/// use ferris_bytesize::{ByteSize, FormatConfig, Formatter};
///
/// let config = FormatConfig::build("%.0f ", true).unwrap();
/// let formatter = Formatter::new(config);
/// assert_eq!(formatter.format(ByteSize::new(2048.0)), "2 kilobytes");
/// assert_eq!(formatter.format(ByteSize::new(1.0)), "1 byte");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Formats `size` in the largest unit it reaches.
    pub fn format(&self, size: ByteSize) -> String {
        render(
            size,
            &self.config.number_format,
            None,
            self.config.long_units,
        )
    }

    /// Formats `size` in a fixed unit.
    pub fn format_in(&self, size: ByteSize, unit: Unit) -> String {
        render(
            size,
            &self.config.number_format,
            Some(unit),
            self.config.long_units,
        )
    }
}

/// Core formatting routine shared by every public entry point.
pub(crate) fn render(
    size: ByteSize,
    number_format: &NumberFormat,
    unit: Option<Unit>,
    long_units: bool,
) -> String {
    let bytes = size.get();
    let unit = unit.unwrap_or_else(|| Unit::for_value(bytes));
    let number = number_format.render_number(bytes / unit.multiplier());

    let label = if !long_units {
        unit.short_name()
    } else if is_singular(&number) {
        unit.long_name()
    } else {
        unit.plural_name()
    };

    number_format.surround(&number) + label
}

/// Only a written value of exactly one takes the singular form.
///
/// The check runs on the rounded text, so `1.004` written as `"1.00"` is
/// singular while `0` and `0.50` are plural.
fn is_singular(rendered: &str) -> bool {
    rendered
        .trim()
        .parse::<f64>()
        .map(|value| value == 1.0)
        .unwrap_or(false)
}
