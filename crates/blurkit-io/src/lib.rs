#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// High-level read/write functions for image files.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::{read_image, write_image};
