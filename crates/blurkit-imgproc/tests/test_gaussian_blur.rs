use blurkit_image::{Image, ImageError, ImageSize};
use blurkit_imgproc::filter::gaussian_blur;

fn smooth_test_image(size: ImageSize) -> Result<Image<f32, 1>, ImageError> {
    let cx = size.width as f32 / 2.0;
    let cy = size.height as f32 / 2.0;
    let data = (0..size.height)
        .flat_map(|y| (0..size.width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            (-(dx * dx + dy * dy) / 50.0).exp()
        })
        .collect();
    Image::new(size, data)
}

#[test]
fn test_separable_matches_joint_in_interior() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 32,
        height: 32,
    };
    let img = smooth_test_image(size)?;

    let sigma = 2.0;
    // radius = ceil(2) * 3, the edge approximation reaches this far inwards
    let margin = 6;

    let mut joint = Image::<f32, 1>::from_size_val(size, 0.0)?;
    gaussian_blur(&img, &mut joint, sigma, false)?;

    let mut separable = Image::<f32, 1>::from_size_val(size, 0.0)?;
    gaussian_blur(&img, &mut separable, sigma, true)?;

    let mut max_diff = 0.0f32;
    for y in margin..size.height - margin {
        for x in margin..size.width - margin {
            let diff = (joint.get_pixel(0, y, x)? - separable.get_pixel(0, y, x)?).abs();
            max_diff = max_diff.max(diff);
        }
    }
    assert!(
        max_diff < 1e-3,
        "joint and separable interiors diverge: max diff {}",
        max_diff
    );
    Ok(())
}

#[test]
fn test_blur_spreads_impulse_symmetrically() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 15,
        height: 15,
    };
    let mut data = vec![0.0f32; 15 * 15];
    data[7 * 15 + 7] = 1.0;
    let img = Image::<f32, 1>::new(size, data)?;

    let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
    gaussian_blur(&img, &mut dst, 1.0, true)?;

    let center = *dst.get_pixel(0, 7, 7)?;
    assert!(center > 0.0);
    for (dy, dx) in [(0isize, 1isize), (1, 0), (0, -1), (-1, 0)] {
        let y = (7 + dy) as usize;
        let x = (7 + dx) as usize;
        let v = *dst.get_pixel(0, y, x)?;
        assert!(v > 0.0 && v < center);
    }

    // 180 degree symmetry of the response around the impulse
    for dy in -3isize..=3 {
        for dx in -3isize..=3 {
            let a = *dst.get_pixel(0, (7 + dy) as usize, (7 + dx) as usize)?;
            let b = *dst.get_pixel(0, (7 - dy) as usize, (7 - dx) as usize)?;
            assert!((a - b).abs() < 1e-6);
        }
    }
    Ok(())
}

#[test]
fn test_blur_multi_channel_independent() -> Result<(), ImageError> {
    let size = ImageSize {
        width: 6,
        height: 6,
    };
    // one constant plane and one impulse plane; blurring must not mix them
    let mut data = vec![0.0f32; 2 * 36];
    data[..36].iter_mut().for_each(|v| *v = 0.5);
    data[36 + 21] = 1.0;
    let img = Image::<f32, 2>::new(size, data)?;

    let mut dst = Image::<f32, 2>::from_size_val(size, 0.0)?;
    gaussian_blur(&img, &mut dst, 1.0, false)?;

    for &v in dst.plane(0)? {
        assert!((v - 0.5).abs() < 1e-5);
    }
    let blurred_impulse = dst.plane(1)?;
    assert!(blurred_impulse.iter().any(|&v| v > 0.0));
    assert!(blurred_impulse.iter().all(|&v| v < 1.0));
    Ok(())
}
