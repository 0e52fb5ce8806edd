use std::fmt;
use std::str::FromStr;

use crate::errors::ByteSizeError;

struct UnitNames {
    short: &'static str,
    long: &'static str,
    plural: &'static str,
}

// Indexed by `Unit as usize`, which is also the power of 1024.
const NAMES: [UnitNames; 9] = [
    UnitNames { short: "B", long: "byte", plural: "bytes" },
    UnitNames { short: "KB", long: "kilobyte", plural: "kilobytes" },
    UnitNames { short: "MB", long: "megabyte", plural: "megabytes" },
    UnitNames { short: "GB", long: "gigabyte", plural: "gigabytes" },
    UnitNames { short: "TB", long: "terabyte", plural: "terabytes" },
    UnitNames { short: "PB", long: "petabyte", plural: "petabytes" },
    UnitNames { short: "EB", long: "exabyte", plural: "exabytes" },
    UnitNames { short: "ZB", long: "zettabyte", plural: "zettabytes" },
    UnitNames { short: "YB", long: "yottabyte", plural: "yottabytes" },
];

/// A binary (1024-based) unit of byte quantity.
///
/// Variants are ordered from smallest to largest, so `Unit::Byte < Unit::Yottabyte`.
///
/// # Examples
///
/// ```
/// use ferris_bytesize::Unit;
///
/// assert_eq!(Unit::Kilobyte.multiplier(), 1024.0);
/// assert_eq!(Unit::from_alias("megabytes"), Some(Unit::Megabyte));
/// assert_eq!(Unit::Gigabyte.short_name(), "GB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Byte = 0,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
    Zettabyte,
    Yottabyte,
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Unit; 9] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
        Unit::Zettabyte,
        Unit::Yottabyte,
    ];

    /// Power of 1024 this unit represents.
    pub const fn exponent(self) -> u32 {
        self as u32
    }

    /// Number of bytes in one of this unit.
    ///
    /// Every multiplier is a power of two, so it is exact as an `f64`.
    pub fn multiplier(self) -> f64 {
        1024_f64.powi(self.exponent() as i32)
    }

    fn names(self) -> &'static UnitNames {
        &NAMES[self as usize]
    }

    /// Abbreviation such as `"KB"`.
    pub fn short_name(self) -> &'static str {
        self.names().short
    }

    /// Singular word such as `"kilobyte"`.
    pub fn long_name(self) -> &'static str {
        self.names().long
    }

    /// Plural word such as `"kilobytes"`.
    pub fn plural_name(self) -> &'static str {
        self.names().plural
    }

    /// All spellings accepted for this unit on input.
    pub fn aliases(self) -> [&'static str; 3] {
        let names = self.names();
        [names.short, names.long, names.plural]
    }

    /// Resolves a unit name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not an alias of one of the nine units.
    pub fn from_alias(alias: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| {
            unit.aliases()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(alias))
        })
    }

    /// Picks the largest unit whose multiplier does not exceed `bytes`.
    ///
    /// Values below one kilobyte, negative values and NaN all map to [`Unit::Byte`].
    ///
    /// ```
    /// use ferris_bytesize::Unit;
    ///
    /// assert_eq!(Unit::for_value(1023.0), Unit::Byte);
    /// assert_eq!(Unit::for_value(1024.0), Unit::Kilobyte);
    /// assert_eq!(Unit::for_value(-5.0), Unit::Byte);
    /// ```
    pub fn for_value(bytes: f64) -> Unit {
        Unit::ALL
            .into_iter()
            .rev()
            .find(|unit| unit.multiplier() <= bytes)
            .unwrap_or(Unit::Byte)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Unit {
    type Err = ByteSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_alias(s).ok_or_else(|| ByteSizeError::UnrecognizedUnit(s.to_string()))
    }
}
