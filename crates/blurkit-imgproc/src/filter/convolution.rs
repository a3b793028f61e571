use blurkit_image::{Image, ImageError};
use rayon::prelude::*;

use super::kernels::Kernel;

/// Convolve one output row of a single channel plane.
///
/// The kernel footprint is clamped to the plane bounds and the weighted sum
/// is divided by the sum of the weights that were actually applied, so pixels
/// near the border stay a proper weighted average of the pixels that exist
/// (edge renormalization), instead of darkening towards zero.
fn convolve_row(src_plane: &[f32], dst_row: &mut [f32], kernel: &Kernel, y: usize, rows: usize) {
    let cols = dst_row.len();
    let half_h = kernel.rows() / 2;
    let half_w = kernel.cols() / 2;

    let y_min = y.saturating_sub(half_h);
    let y_max = (y + half_h).min(rows - 1);

    let k_data = kernel.as_slice();
    let k_cols = kernel.cols();

    for (x, out) in dst_row.iter_mut().enumerate() {
        let x_min = x.saturating_sub(half_w);
        let x_max = (x + half_w).min(cols - 1);

        let mut value = 0.0f32;
        let mut total = 0.0f32;
        for v in y_min..=y_max {
            let k_row = (v + half_h - y) * k_cols;
            let src_row = v * cols;
            for u in x_min..=x_max {
                let w = k_data[k_row + (u + half_w - x)];
                value += src_plane[src_row + u] * w;
                total += w;
            }
        }

        // the center tap is always in bounds so total > 0
        *out = value / total;
    }
}

/// Convolve an image with a 2D kernel, renormalizing at the borders.
///
/// Each channel is filtered independently. The output shape equals the input
/// shape; output rows are computed in parallel since every row only reads
/// `src` and owns its slice of `dst`.
///
/// # Arguments
///
/// * `src` - The source image with planar shape (C, H, W).
/// * `dst` - The destination image with planar shape (C, H, W).
/// * `kernel` - The filter weights, both dimensions odd.
///
/// # Errors
///
/// Returns [`ImageError::ShapeMismatch`] if `src` and `dst` differ in size
/// and [`ImageError::InvalidKernel`] if a kernel dimension is zero or even.
pub fn convolve<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if kernel.rows() == 0 || kernel.cols() == 0 || kernel.rows() % 2 == 0 || kernel.cols() % 2 == 0
    {
        return Err(ImageError::InvalidKernel(kernel.rows(), kernel.cols()));
    }

    let rows = src.rows();
    let cols = src.cols();
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let plane_stride = rows * cols;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(chunk_idx, dst_row)| {
            let ch = chunk_idx / rows;
            let y = chunk_idx % rows;
            let src_plane = &src_data[ch * plane_stride..(ch + 1) * plane_stride];
            convolve_row(src_plane, dst_row, kernel, y, rows);
        });

    Ok(())
}
