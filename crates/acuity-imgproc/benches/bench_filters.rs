use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use acuity_image::{Image, ImageSize, Rect};
use acuity_imgproc::filter::{gaussian_blur, GaussianSharpenProcessor};
use acuity_imgproc::parallel::ExecutionStrategy;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Sharpen");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for sigma in [1.0f32, 3.0, 5.0].iter() {
            let processor = GaussianSharpenProcessor::new(*sigma);
            let kernel_size = processor.kernel_size();

            group.throughput(criterion::Throughput::Elements(
                (*width * *height * kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_size: ImageSize = [*width, *height].into();
            let image_f32 = Image::<f32, 3>::from_size(image_size).unwrap();
            let image_u8 = image_f32.cast::<u8>().unwrap();

            group.bench_with_input(
                BenchmarkId::new("gaussian_sharpen_f32", &parameter_string),
                &image_f32,
                |b, i| {
                    let mut frame = i.clone();
                    b.iter(|| {
                        black_box(processor.apply(
                            &mut frame,
                            Rect::full(image_size),
                            ExecutionStrategy::Auto,
                        ))
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("gaussian_sharpen_u8", &parameter_string),
                &image_u8,
                |b, i| {
                    let mut frame = i.clone();
                    b.iter(|| {
                        black_box(processor.apply(
                            &mut frame,
                            Rect::full(image_size),
                            ExecutionStrategy::Auto,
                        ))
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_f32", &parameter_string),
                &image_f32,
                |b, i| {
                    let mut dst = i.clone();
                    b.iter(|| {
                        black_box(gaussian_blur(
                            i,
                            &mut dst,
                            (kernel_size, kernel_size),
                            (*sigma, *sigma),
                        ))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
