use blurkit_image::{Image, ImageError};

use super::{convolve, kernels};

/// Blur an image using a gaussian filter.
///
/// # Arguments
///
/// * `src` - The source image with planar shape (C, H, W).
/// * `dst` - The destination image with planar shape (C, H, W).
/// * `sigma` - The standard deviation of the gaussian kernel.
/// * `separable` - Run the two-pass separable pipeline instead of one full
///   2D convolution.
///
/// The separable pipeline applies the 1D kernel along the rows into a fresh
/// intermediate image and then its transpose along the columns into `dst`;
/// the intermediate buffer is required because the convolution engine must
/// never read the buffer it writes. Both modes agree in the interior. Near
/// the borders they differ slightly: each 1D pass renormalizes its own
/// truncated weights, which is not mathematically identical to
/// renormalizing the truncated 2D footprint once. This is a known
/// approximation of the separable mode, not a defect.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    sigma: f32,
    separable: bool,
) -> Result<(), ImageError> {
    if separable {
        let kernel_x = kernels::gaussian_kernel_1d(sigma)?;
        let kernel_y = kernel_x.transpose();

        let mut intermediate = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
        convolve(src, &mut intermediate, &kernel_x)?;
        convolve(&intermediate, dst, &kernel_y)?;
    } else {
        let kernel = kernels::gaussian_kernel_2d(sigma)?;
        convolve(src, dst, &kernel)?;
    }

    Ok(())
}
