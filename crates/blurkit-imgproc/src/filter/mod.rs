//! Filter operations
//!
//! This module provides the convolution engine and the gaussian blur
//! pipeline built on top of it.

/// Filter kernels
pub mod kernels;

/// Convolution engine
mod convolution;
pub use convolution::*;

/// Blur operations
mod ops;
pub use ops::*;
