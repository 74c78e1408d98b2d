use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use restoreval_image::{Image, ImageSize};
use restoreval_imgproc::{color, crop, normalize};

fn random_image(size: ImageSize, rng: &mut StdRng) -> Image<f32, 3> {
    let data = (0..size.width * size.height * 3)
        .map(|_| rng.random_range(0.0..1.0))
        .collect();
    Image::new(size, data).unwrap()
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("Preprocess");
    let mut rng = StdRng::seed_from_u64(42);

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = ImageSize {
            width: *width,
            height: *height,
        };
        let image = random_image(image_size, &mut rng);
        let out = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("crop_border", &parameter_string),
            &image,
            |b, i| b.iter(|| crop::crop_border(black_box(i), black_box(4))),
        );

        group.bench_with_input(
            BenchmarkId::new("rgb_from_bgr", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| color::rgb_from_bgr(black_box(src), black_box(&mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("normalize_mean_std", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    normalize::normalize_mean_std(
                        black_box(src),
                        black_box(&mut dst),
                        &[0.5, 0.5, 0.5],
                        &[0.5, 0.5, 0.5],
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_preprocess);
criterion_main!(benches);
