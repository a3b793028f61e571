use blurkit_image::ImageError;

/// A dense row-major matrix of filter weights.
///
/// One-dimensional kernels are represented as a single row (1, k); the
/// column variant used by the second separable pass is its [`transpose`].
///
/// [`transpose`]: Kernel::transpose
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Kernel {
    /// Create a new kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// If the data length does not match `rows * cols`, an error is returned.
    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self, ImageError> {
        if data.len() != rows * cols {
            return Err(ImageError::InvalidChannelShape(data.len(), rows * cols));
        }
        Ok(Self { data, rows, cols })
    }

    /// The number of rows of the kernel.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns of the kernel.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The weights in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The weight at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    /// The transposed kernel, shape (cols, rows).
    pub fn transpose(&self) -> Kernel {
        let mut data = vec![0.0; self.data.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Kernel {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

/// Support radius for a gaussian of the given standard deviation.
///
/// The kernel extends `ceil(sigma) * 3` samples to each side of the center,
/// beyond which the gaussian tail is negligible.
fn gaussian_radius(sigma: f32) -> Result<usize, ImageError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidParameter(sigma));
    }
    Ok(sigma.ceil() as usize * 3)
}

/// Create a normalized 1D gaussian kernel of shape (1, 2 * radius + 1).
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the gaussian, must be positive.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] if `sigma` is not positive.
pub fn gaussian_kernel_1d(sigma: f32) -> Result<Kernel, ImageError> {
    let radius = gaussian_radius(sigma)?;
    let kernel_size = 2 * radius + 1;
    let sigma_sq = sigma * sigma;

    let mut kernel = Vec::with_capacity(kernel_size);
    for i in 0..kernel_size {
        let x = i as f32 - radius as f32;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);

    Kernel::new(kernel, 1, kernel_size)
}

/// Create a normalized 2D gaussian kernel of shape (2 * radius + 1, 2 * radius + 1).
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the gaussian, must be positive.
///
/// # Errors
///
/// Returns [`ImageError::InvalidParameter`] if `sigma` is not positive.
pub fn gaussian_kernel_2d(sigma: f32) -> Result<Kernel, ImageError> {
    let radius = gaussian_radius(sigma)?;
    let kernel_size = 2 * radius + 1;
    let sigma_sq = sigma * sigma;

    let mut kernel = Vec::with_capacity(kernel_size * kernel_size);
    for i in 0..kernel_size {
        let y = i as f32 - radius as f32;
        for j in 0..kernel_size {
            let x = j as f32 - radius as f32;
            kernel.push((-(x * x + y * y) / (2.0 * sigma_sq)).exp());
        }
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);

    Kernel::new(kernel, kernel_size, kernel_size)
}

/// Create a uniform box kernel of shape (1, kernel_size).
pub fn box_kernel_1d(kernel_size: usize) -> Result<Kernel, ImageError> {
    Kernel::new(
        vec![1.0 / kernel_size as f32; kernel_size],
        1,
        kernel_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_kernel_1d_sums_to_one() -> Result<(), ImageError> {
        for sigma in [0.5, 1.0, 2.0, 3.7] {
            let kernel = gaussian_kernel_1d(sigma)?;
            assert_eq!(kernel.rows(), 1);
            assert_eq!(kernel.cols() % 2, 1);
            let sum = kernel.as_slice().iter().sum::<f32>();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_2d_sigma_one() -> Result<(), ImageError> {
        // radius = ceil(1) * 3 = 3 so the kernel is 7x7
        let kernel = gaussian_kernel_2d(1.0)?;
        assert_eq!(kernel.rows(), 7);
        assert_eq!(kernel.cols(), 7);

        let sum = kernel.as_slice().iter().sum::<f32>();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);

        // symmetric under 180 degree rotation
        let data = kernel.as_slice();
        for (i, &w) in data.iter().enumerate() {
            assert_eq!(w, data[data.len() - 1 - i]);
        }

        // the center weight is the maximum
        let center = kernel.get(3, 3);
        assert!(data.iter().all(|&w| w <= center));
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_invalid_sigma() {
        assert!(matches!(
            gaussian_kernel_1d(0.0),
            Err(ImageError::InvalidParameter(_))
        ));
        assert!(matches!(
            gaussian_kernel_2d(-1.5),
            Err(ImageError::InvalidParameter(_))
        ));
        assert!(matches!(
            gaussian_kernel_1d(f32::NAN),
            Err(ImageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_kernel_transpose() -> Result<(), ImageError> {
        let kernel = Kernel::new(vec![1.0, 2.0, 3.0], 1, 3)?;
        let transposed = kernel.transpose();
        assert_eq!(transposed.rows(), 3);
        assert_eq!(transposed.cols(), 1);
        assert_eq!(transposed.get(2, 0), 3.0);
        assert_eq!(transposed.transpose(), kernel);
        Ok(())
    }

    #[test]
    fn test_box_kernel_1d() -> Result<(), ImageError> {
        let kernel = box_kernel_1d(5)?;
        assert_eq!(kernel.cols(), 5);
        assert_eq!(kernel.as_slice(), &[0.2; 5]);
        Ok(())
    }
}
