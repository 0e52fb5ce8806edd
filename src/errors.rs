use std::num::ParseFloatError;

/// Error type representing the ways parsing or formatting a byte size can fail.
///
/// Parsing failures never produce a partial value: a caller either gets a
/// [`ByteSize`](crate::ByteSize) or one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteSizeError {
    /// The input has no unit suffix at all, such as `"1"` or `""`.
    MissingUnit,

    /// A unit suffix is present but is not a known unit name.
    ///
    /// Contains the suffix as it appeared in the input.
    UnrecognizedUnit(String),

    /// The numeric part of the input could not be read as a number.
    ///
    /// `source` is `None` when the number was rejected before conversion,
    /// for example because it carried a sign.
    MalformedNumber {
        input: String,
        source: Option<ParseFloatError>,
    },

    /// The number, once scaled by its unit, does not fit in an `f64`.
    Overflow(String),

    /// An explicit unit passed to the formatter is not a known unit name.
    UnrecognizedFormatUnit(String),

    /// A number template could not be understood.
    InvalidFormat(String),
}

impl std::fmt::Display for ByteSizeError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use ferris_bytesize::ByteSizeError;
    /// let err = ByteSizeError::UnrecognizedFormatUnit("potato".to_string());
    /// assert_eq!(format!("{}", err), "Unrecognized unit: potato");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteSizeError::MissingUnit => write!(f, "Unrecognized size suffix"),
            ByteSizeError::UnrecognizedUnit(unit) => {
                write!(f, "Unrecognized size suffix {}", unit)
            }
            ByteSizeError::MalformedNumber { input, source } => match source {
                Some(e) => write!(f, "Malformed number {:?}: {}", input, e),
                None => write!(f, "Malformed number {:?}", input),
            },
            ByteSizeError::Overflow(input) => {
                write!(f, "Byte size {:?} is out of range", input)
            }
            ByteSizeError::UnrecognizedFormatUnit(unit) => {
                write!(f, "Unrecognized unit: {}", unit)
            }
            ByteSizeError::InvalidFormat(template) => {
                write!(f, "Invalid number format {:?}", template)
            }
        }
    }
}

impl std::error::Error for ByteSizeError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only [`ByteSizeError::MalformedNumber`] wraps another error.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ByteSizeError::MalformedNumber {
                source: Some(e), ..
            } => Some(e),
            _ => None,
        }
    }
}
