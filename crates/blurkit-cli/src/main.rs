use std::path::{Path, PathBuf};
use std::time::Instant;

use argh::FromArgs;

use blurkit::image::Image;
use blurkit::imgproc::filter::gaussian_blur;
use blurkit::io::{read_image, write_image};

#[derive(FromArgs)]
/// Blur an image with a gaussian filter
struct Args {
    /// the path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// the path to write the blurred image to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// the standard deviation of the gaussian kernel
    #[argh(option, short = 's')]
    sigma: f32,

    /// run the two-pass separable pipeline instead of the full 2D kernel
    #[argh(switch)]
    separable: bool,
}

/// Run the whole pipeline: decode, blur, encode.
///
/// Any failure aborts before the output file is written.
fn run(input: &Path, output: &Path, sigma: f32, separable: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = Instant::now();
    let src = read_image(input)?;
    log::info!(
        "decoded {} ({}x{}x{}) in {:?}",
        input.display(),
        src.cols(),
        src.rows(),
        src.num_channels(),
        now.elapsed()
    );

    let mut dst = Image::from_size_val(src.size(), 0.0f32)?;

    let now = Instant::now();
    gaussian_blur(&src, &mut dst, sigma, separable)?;
    log::info!(
        "blurred with sigma {} ({} mode) in {:?}",
        sigma,
        if separable { "separable" } else { "joint" },
        now.elapsed()
    );

    let now = Instant::now();
    write_image(output, &dst)?;
    log::info!("encoded {} in {:?}", output.display(), now.elapsed());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    run(&args.input, &args.output, args.sigma, args.separable)
}
