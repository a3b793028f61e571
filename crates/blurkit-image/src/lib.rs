#![deny(missing_docs)]
//! Planar image types and traits for the blurkit pipeline

/// image representation with channel-major storage.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations to cast and reshape image buffers.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
