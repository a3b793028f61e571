use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use blurkit_image::Image;
use blurkit_imgproc::filter::gaussian_blur;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for sigma in [0.5f32, 1.5, 3.0].iter() {
            let parameter_string = format!("{}x{}x{}", width, height, sigma);

            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            // input image
            let image_data = vec![0f32; width * height * 3];
            let image_size = [*width, *height].into();
            let image = Image::<_, 3>::new(image_size, image_data).unwrap();

            // output image
            let output = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_joint", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(gaussian_blur(src, &mut dst, *sigma, false)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_separable", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(gaussian_blur(src, &mut dst, *sigma, true)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
