use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::config::with_default_config;
use crate::errors::ByteSizeError;
use crate::format::{render, NumberFormat};
use crate::parse::parse;
use crate::units::Unit;

/// A number of bytes.
///
/// The count is held as an `f64`, so sizes up to and beyond a yottabyte can be
/// represented and combined. Arithmetic follows ordinary floating point rules;
/// subtracting a larger size gives a negative count, which formats in bytes.
///
/// # Examples
///
/// ```
/// use ferris_bytesize::ByteSize;
///
/// let total = ByteSize::new(1073741824.0) + ByteSize::new(10485760.0);
/// assert_eq!(total.to_string(), "1.01GB");
///
/// let half: ByteSize = "512 megabytes".parse().unwrap();
/// assert_eq!((ByteSize::GB - half).to_string(), "512.00MB");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ByteSize(f64);

impl ByteSize {
    pub const ZERO: ByteSize = ByteSize(0.0);
    pub const B: ByteSize = ByteSize(1.0);
    pub const KB: ByteSize = ByteSize(1024.0);
    pub const MB: ByteSize = ByteSize(1048576.0);
    pub const GB: ByteSize = ByteSize(1073741824.0);
    pub const TB: ByteSize = ByteSize(1099511627776.0);
    pub const PB: ByteSize = ByteSize(1125899906842624.0);
    pub const EB: ByteSize = ByteSize(1152921504606846976.0);
    pub const ZB: ByteSize = ByteSize(1180591620717411303424.0);
    pub const YB: ByteSize = ByteSize(1208925819614629174706176.0);

    /// Creates a byte size of `bytes` bytes.
    pub const fn new(bytes: f64) -> Self {
        Self(bytes)
    }

    /// Creates a byte size of `count` of `unit`.
    ///
    /// ```
    /// use ferris_bytesize::{ByteSize, Unit};
    ///
    /// assert_eq!(ByteSize::of(2.0, Unit::Kilobyte), ByteSize::new(2048.0));
    /// ```
    pub fn of(count: f64, unit: Unit) -> Self {
        Self(count * unit.multiplier())
    }

    /// Raw byte count.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Size expressed in `unit`, e.g. `0.5` for 512 bytes in kilobytes.
    pub fn in_unit(self, unit: Unit) -> f64 {
        self.0 / unit.multiplier()
    }

    /// Replaces this value with the parsed `input`.
    ///
    /// On error the current value is kept.
    ///
    /// ```
    /// use ferris_bytesize::ByteSize;
    ///
    /// let mut limit = ByteSize::MB;
    /// limit.set("4 MB").unwrap();
    /// assert_eq!(limit, ByteSize::new(4.0 * 1048576.0));
    /// assert!(limit.set("4 potatoes").is_err());
    /// assert_eq!(limit, ByteSize::new(4.0 * 1048576.0));
    /// ```
    pub fn set(&mut self, input: &str) -> Result<(), ByteSizeError> {
        *self = parse(input)?;
        Ok(())
    }

    /// The unit this size is written in when none is requested.
    pub fn natural_unit(self) -> Unit {
        Unit::for_value(self.0)
    }

    /// Formats with an explicit template, unit and unit style.
    ///
    /// `unit` of `None` picks the largest unit the value reaches.
    ///
    /// ```
    /// use ferris_bytesize::{ByteSize, NumberFormat, Unit};
    ///
    /// let fmt = NumberFormat::with_precision(0).suffix(" ");
    /// assert_eq!(ByteSize::TB.format(&fmt, Some(Unit::Gigabyte), false), "1024 GB");
    /// ```
    pub fn format(self, number_format: &NumberFormat, unit: Option<Unit>, long_units: bool) -> String {
        render(self, number_format, unit, long_units)
    }

    /// Formats with a printf-style template and a unit given by name.
    ///
    /// An empty `unit` picks the largest unit the value reaches.
    ///
    /// # Errors
    ///
    /// * [`ByteSizeError::InvalidFormat`] if the template cannot be read
    /// * [`ByteSizeError::UnrecognizedFormatUnit`] if `unit` is not a known unit name
    ///
    /// ```
    /// use ferris_bytesize::ByteSize;
    ///
    /// let text = ByteSize::TB.format_with("%.8f ", "petabyte", true).unwrap();
    /// assert_eq!(text, "0.00097656 petabytes");
    ///
    /// let err = ByteSize::TB.format_with("%.0f ", "potato", false).unwrap_err();
    /// assert_eq!(err.to_string(), "Unrecognized unit: potato");
    /// ```
    pub fn format_with(self, template: &str, unit: &str, long_units: bool) -> Result<String, ByteSizeError> {
        let number_format: NumberFormat = template.parse()?;
        let unit = if unit.is_empty() {
            None
        } else {
            let resolved = Unit::from_alias(unit)
                .ok_or_else(|| ByteSizeError::UnrecognizedFormatUnit(unit.to_string()))?;
            Some(resolved)
        };
        Ok(render(self, &number_format, unit, long_units))
    }
}

impl fmt::Display for ByteSize {
    /// Writes the size using the process-wide default configuration.
    ///
    /// A precision in the format string overrides the default precision and
    /// the alternate flag forces long unit names.
    ///
    /// ```
    /// use ferris_bytesize::ByteSize;
    ///
    /// assert_eq!(format!("{:.0}", ByteSize::new(2048.0)), "2KB");
    /// assert_eq!(format!("{:#.0}", ByteSize::new(2048.0)), "2kilobytes");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let alternate = f.alternate();
        let text = with_default_config(|config| {
            let long_units = config.long_units || alternate;
            match precision {
                Some(precision) => {
                    let number_format = config.number_format.clone().decimals(precision);
                    render(*self, &number_format, None, long_units)
                }
                None => render(*self, &config.number_format, None, long_units),
            }
        });
        f.write_str(&text)
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<f64> for ByteSize {
    fn from(bytes: f64) -> Self {
        Self(bytes)
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes as f64)
    }
}

impl From<u32> for ByteSize {
    fn from(bytes: u32) -> Self {
        Self(f64::from(bytes))
    }
}

impl From<usize> for ByteSize {
    fn from(bytes: usize) -> Self {
        Self(bytes as f64)
    }
}

impl From<ByteSize> for f64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl Add for ByteSize {
    type Output = ByteSize;

    fn add(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self.0 + rhs.0)
    }
}

impl Sub for ByteSize {
    type Output = ByteSize;

    fn sub(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self.0 - rhs.0)
    }
}

impl AddAssign for ByteSize {
    fn add_assign(&mut self, rhs: ByteSize) {
        self.0 += rhs.0;
    }
}

impl SubAssign for ByteSize {
    fn sub_assign(&mut self, rhs: ByteSize) {
        self.0 -= rhs.0;
    }
}

impl Neg for ByteSize {
    type Output = ByteSize;

    fn neg(self) -> ByteSize {
        ByteSize(-self.0)
    }
}

impl Mul<f64> for ByteSize {
    type Output = ByteSize;

    fn mul(self, rhs: f64) -> ByteSize {
        ByteSize(self.0 * rhs)
    }
}

impl Mul<ByteSize> for f64 {
    type Output = ByteSize;

    fn mul(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self * rhs.0)
    }
}

impl Div<f64> for ByteSize {
    type Output = ByteSize;

    fn div(self, rhs: f64) -> ByteSize {
        ByteSize(self.0 / rhs)
    }
}

impl Sum for ByteSize {
    fn sum<I: Iterator<Item = ByteSize>>(iter: I) -> ByteSize {
        iter.fold(ByteSize::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ByteSize> for ByteSize {
    fn sum<I: Iterator<Item = &'a ByteSize>>(iter: I) -> ByteSize {
        iter.copied().sum()
    }
}
