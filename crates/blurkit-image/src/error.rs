/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the expected size.
    #[error("Data length ({0}) does not match the expected size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same shape.
    #[error("Image shapes do not match: {0}x{1} != {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),

    /// Error when a kernel dimension is zero or even.
    #[error("Kernel dimensions must be odd and non-zero, got {0}x{1}")]
    InvalidKernel(usize, usize),

    /// Error when a scalar parameter is out of its valid range.
    #[error("Invalid parameter: sigma must be positive, got {0}")]
    InvalidParameter(f32),

    /// Error when a pixel access is out of bounds.
    #[error("Pixel index out of bounds: channel {0}, row {1}, col {2}")]
    PixelIndexOutOfBounds(usize, usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast pixel value to {0}")]
    CastError(String),
}
