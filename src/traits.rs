use crate::byte_size::ByteSize;

/// Formats plain numeric byte counts into human-readable strings with appropriate units.
///
/// This trait is useful for displaying file sizes, memory usage, or any other
/// byte count already held as a primitive. The output scales from bytes up to
/// yottabytes and follows the process-wide default format.
///
/// # Examples
///
/// ```
/// use ferris_bytesize::traits::FormatSize;
/// let size: u64 = 1024;
/// assert_eq!(size.format_size(), "1.00KB");
///
/// let large_size: u64 = 1024 * 1024 * 1024;
/// assert_eq!(large_size.format_size(), "1.00GB");
/// ```
pub trait FormatSize {
    /// Converts the number into a [`ByteSize`].
    fn to_byte_size(&self) -> ByteSize;

    /// Formats the number into a human-readable string with appropriate size units.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_bytesize::traits::FormatSize;
    ///
    /// assert_eq!(50_u64.format_size(), "50.00B");
    /// assert_eq!((1536_u64).format_size(), "1.50KB");
    /// assert_eq!((1024 * 1024 * 1024 * 1024_u64).format_size(), "1.00TB");
    /// ```
    fn format_size(&self) -> String {
        self.to_byte_size().to_string()
    }
}

impl FormatSize for u64 {
    fn to_byte_size(&self) -> ByteSize {
        ByteSize::from(*self)
    }
}

impl FormatSize for u32 {
    fn to_byte_size(&self) -> ByteSize {
        ByteSize::from(*self)
    }
}

impl FormatSize for usize {
    fn to_byte_size(&self) -> ByteSize {
        ByteSize::from(*self)
    }
}

impl FormatSize for f64 {
    fn to_byte_size(&self) -> ByteSize {
        ByteSize::new(*self)
    }
}
