//! Measuring and displaying byte sizes.
//!
//! [`ByteSize`] holds a count of bytes. Sizes can be added and subtracted and
//! the result is written with the largest binary (1024-based) unit it reaches:
//!
//! ```
//! use ferris_bytesize::{parse, ByteSize};
//!
//! assert_eq!(ByteSize::new(1024.0).to_string(), "1.00KB");
//! assert_eq!(parse("1024 GB").unwrap().to_string(), "1.00TB");
//! ```
//!
//! `Display` follows a process-wide default that can be changed with
//! [`set_default_format`] and [`set_long_units`]. Code that needs its own
//! format, or formats from several threads with different preferences, should
//! hold a [`Formatter`] instead.

pub mod byte_size;
pub mod config;
pub mod errors;
pub mod format;
pub mod parse;
pub mod traits;
pub mod units;


pub use byte_size::ByteSize;
pub use config::{
    default_config, set_default_config, set_default_format, set_default_number_format,
    set_long_units, FormatConfig,
};
pub use errors::ByteSizeError;
pub use format::{Formatter, NumberFormat};
pub use parse::parse;
pub use units::Unit;
