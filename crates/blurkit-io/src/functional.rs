use std::path::Path;

use blurkit_image::{ops, Image, ImageSize};

use crate::error::IoError;

/// Reads an image file into a normalized planar buffer.
///
/// The method reads any format supported by the image crate, converts the
/// pixel data to RGB, rearranges it into channel-major planes and scales the
/// 8-bit samples to [0, 1].
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A planar RGB image with f32 samples in [0, 1].
pub fn read_image(file_path: impl AsRef<Path>) -> Result<Image<f32, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let rgb = img.into_rgb8();
    let planar = ops::interleaved_to_planar::<u8, 3>(rgb.as_raw(), size)?;

    let mut normalized = Image::<f32, 3>::from_size_val(size, 0.0)?;
    ops::cast_and_scale(&planar, &mut normalized, 1. / 255.0)?;

    Ok(normalized)
}

/// Writes a normalized planar buffer to an image file.
///
/// The inverse of [`read_image`]: samples are scaled by 255 and clamped
/// before the cast to u8 so out-of-range values saturate instead of
/// wrapping, then rearranged to the interleaved layout the encoder expects.
/// The output format is derived from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to write the image to.
/// * `image` - The planar RGB image with f32 samples in [0, 1].
pub fn write_image(file_path: impl AsRef<Path>, image: &Image<f32, 3>) -> Result<(), IoError> {
    let interleaved = ops::planar_to_interleaved(image);
    let buf = interleaved
        .iter()
        .map(|&v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect::<Vec<u8>>();

    let rgb = image::RgbImage::from_raw(
        image.cols() as u32,
        image.rows() as u32,
        buf,
    )
    .ok_or_else(|| IoError::ImageEncodeError("pixel buffer does not match image size".to_string()))?;

    rgb.save(file_path)?;

    Ok(())
}
