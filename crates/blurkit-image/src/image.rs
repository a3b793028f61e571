use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use blurkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with planar (channel-major) pixel data.
///
/// The buffer holds `C` contiguous planes of shape (H, W), so the sample at
/// (channel, row, col) lives at `channel * H * W + row * W + col`. This is the
/// layout the convolution engine iterates over; interleaved data coming from
/// a decoder must be rearranged first (see [`crate::ops::interleaved_to_planar`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new image from planar pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in channel-major order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use blurkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 3 * 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != C * size.width * size.height {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                C * size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; C * size.width * size.height];
        Image::new(size, data)
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The number of rows (height) of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns (width) of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// The full planar buffer as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The full planar buffer as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// A single channel plane of shape (H, W).
    pub fn plane(&self, channel: usize) -> Result<&[T], ImageError> {
        if channel >= C {
            return Err(ImageError::PixelIndexOutOfBounds(channel, 0, 0));
        }
        let stride = self.size.width * self.size.height;
        Ok(&self.data[channel * stride..(channel + 1) * stride])
    }

    /// Get a reference to the pixel at (channel, row, col).
    pub fn get_pixel(&self, channel: usize, row: usize, col: usize) -> Result<&T, ImageError> {
        if channel >= C || row >= self.size.height || col >= self.size.width {
            return Err(ImageError::PixelIndexOutOfBounds(channel, row, col));
        }
        let idx = channel * self.size.width * self.size.height + row * self.size.width + col;
        Ok(&self.data[idx])
    }
}
