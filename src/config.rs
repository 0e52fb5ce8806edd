use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::ByteSizeError;
use crate::format::NumberFormat;

/// Settings that decide how a byte size is written.
///
/// # Fields
///
/// * `number_format` - Template for the scaled number, `"%.2f"` by default
/// * `long_units` - Write `"kilobytes"` instead of `"KB"`, off by default
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub number_format: NumberFormat,
    pub long_units: bool,
}

impl FormatConfig {
    /// Two decimals and short unit names.
    pub const fn new() -> Self {
        Self {
            number_format: NumberFormat::with_precision(2),
            long_units: false,
        }
    }

    /// Builds a new FormatConfig from a printf-style template.
    ///
    /// # Parameters
    ///
    /// * `template` - Number template such as `"%.2f"` or `"%.0f "`
    /// * `long_units` - Whether to spell units out in full
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::InvalidFormat`] if the template has no single
    /// `%f` conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_bytesize::FormatConfig;
    ///
    /// let config = FormatConfig::build("%.0f ", true).unwrap();
    /// assert_eq!(config.number_format.precision(), 0);
    /// assert!(FormatConfig::build("%s", false).is_err());
    /// ```
    pub fn build(template: &str, long_units: bool) -> Result<FormatConfig, ByteSizeError> {
        let number_format = template.parse()?;
        Ok(FormatConfig {
            number_format,
            long_units,
        })
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    pub fn with_long_units(mut self, long_units: bool) -> Self {
        self.long_units = long_units;
        self
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

// Read by `Display for ByteSize` on every call.
static DEFAULT_CONFIG: RwLock<FormatConfig> = RwLock::new(FormatConfig::new());

fn read_default() -> RwLockReadGuard<'static, FormatConfig> {
    DEFAULT_CONFIG.read().unwrap_or_else(|poisoned| {
        log::warn!("default byte size format lock was poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

fn write_default() -> RwLockWriteGuard<'static, FormatConfig> {
    DEFAULT_CONFIG.write().unwrap_or_else(|poisoned| {
        log::warn!("default byte size format lock was poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

/// Returns a snapshot of the process-wide default configuration.
pub fn default_config() -> FormatConfig {
    read_default().clone()
}

/// Runs `f` against the process-wide default without cloning it.
pub(crate) fn with_default_config<T>(f: impl FnOnce(&FormatConfig) -> T) -> T {
    f(&read_default())
}

/// Replaces the whole process-wide default configuration.
pub fn set_default_config(config: FormatConfig) {
    log::debug!(
        "default byte size format set to {:?} (long units: {})",
        config.number_format.to_string(),
        config.long_units
    );
    *write_default() = config;
}

/// Sets the default number template from printf-style text.
///
/// The current default is left untouched if `template` is invalid.
///
/// # Examples
///
/// ```
/// use ferris_bytesize::{set_default_format, ByteSize};
///
/// set_default_format("%.1f ").unwrap();
/// assert_eq!(ByteSize::new(1536.0).to_string(), "1.5 KB");
/// assert!(set_default_format("%q").is_err());
/// ```
pub fn set_default_format(template: &str) -> Result<(), ByteSizeError> {
    let number_format: NumberFormat = template.parse()?;
    set_default_number_format(number_format);
    Ok(())
}

/// Sets the default number template.
pub fn set_default_number_format(number_format: NumberFormat) {
    log::debug!("default byte size number format set to {:?}", number_format.to_string());
    write_default().number_format = number_format;
}

/// Chooses between `"KB"` and `"kilobytes"` for default formatting.
pub fn set_long_units(long_units: bool) {
    log::debug!("default byte size long units set to {}", long_units);
    write_default().long_units = long_units;
}
