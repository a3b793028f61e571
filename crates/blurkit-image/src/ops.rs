use crate::{error::ImageError, image::ImageSize, Image};

/// Cast the pixel data of an image to a different type and scale it.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `scale` - The scale to multiply the pixel data with.
///
/// Example:
///
/// ```
/// use blurkit_image::{Image, ImageSize};
/// use blurkit_image::ops::cast_and_scale;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0u8, 255],
/// ).unwrap();
///
/// let mut image_f32 = Image::from_size_val(image.size(), 0.0f32).unwrap();
///
/// cast_and_scale(&image, &mut image_f32, 1. / 255.0).unwrap();
///
/// assert_eq!(image_f32.get_pixel(0, 0, 0).unwrap(), &0.0f32);
/// assert_eq!(image_f32.get_pixel(0, 0, 1).unwrap(), &1.0f32);
/// ```
pub fn cast_and_scale<T, U, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<U, C>,
    scale: U,
) -> Result<(), ImageError>
where
    T: Copy + num_traits::NumCast,
    U: Copy + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .try_for_each(|(out, &inp)| {
            let x = U::from(inp).ok_or(ImageError::CastError(
                std::any::type_name::<U>().to_string(),
            ))?;
            *out = x * scale;
            Ok::<(), ImageError>(())
        })?;

    Ok(())
}

/// Rearrange an interleaved (H, W, C) buffer into a planar image.
///
/// This is the layout bridge between decoders, which produce per-pixel
/// interleaved samples, and the channel-major buffers the rest of the
/// pipeline operates on.
pub fn interleaved_to_planar<T, const C: usize>(
    data: &[T],
    size: ImageSize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default,
{
    if data.len() != C * size.width * size.height {
        return Err(ImageError::InvalidChannelShape(
            data.len(),
            C * size.width * size.height,
        ));
    }

    let stride = size.width * size.height;
    let mut planar = vec![T::default(); data.len()];
    for (pixel, samples) in data.chunks_exact(C).enumerate() {
        for (ch, &sample) in samples.iter().enumerate() {
            planar[ch * stride + pixel] = sample;
        }
    }

    Image::new(size, planar)
}

/// Rearrange a planar image into an interleaved (H, W, C) buffer.
pub fn planar_to_interleaved<T, const C: usize>(src: &Image<T, C>) -> Vec<T>
where
    T: Copy + Default,
{
    let stride = src.cols() * src.rows();
    let data = src.as_slice();
    let mut interleaved = vec![T::default(); data.len()];
    for pixel in 0..stride {
        for ch in 0..C {
            interleaved[pixel * C + ch] = data[ch * stride + pixel];
        }
    }
    interleaved
}
