//! Benchmarks for the spectrum pipeline
//!
//! Run with: cargo bench

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use fftvis_rs::analysis::{normalize_magnitude, transform_2d, FftPlan};
use fftvis_rs::types::SampleGrid;
use fftvis_rs::{pipeline, process_image};
use num_complex::Complex;

fn test_grid(width: usize, height: usize) -> SampleGrid {
    let samples = (0..width * height)
        .map(|i| ((i * 37 + 11) % 256) as f64)
        .collect();
    SampleGrid::new(width, height, samples)
}

fn bench_plan_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_construction");

    for size in [64usize, 256, 1024, 4096].iter() {
        group.bench_with_input(BenchmarkId::new("new", size), size, |b, &size| {
            b.iter(|| black_box(FftPlan::new(size)));
        });
    }

    group.finish();
}

fn bench_1d_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_1d_pass");

    for size in [64usize, 256, 1024].iter() {
        let plan = FftPlan::new(*size);
        let buffer: Vec<Complex<f64>> = (0..*size)
            .map(|i| Complex::new((i % 251) as f64, 0.0))
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("process", size), size, |b, _| {
            b.iter_batched(
                || buffer.clone(),
                |mut data| {
                    plan.process(&mut data);
                    black_box(data)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_transform_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_2d");

    for size in [64usize, 128, 256].iter() {
        let grid = test_grid(*size, *size);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("square", size), size, |b, _| {
            b.iter_batched(
                || grid.clone(),
                |g| black_box(transform_2d(g).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_normalize_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_magnitude");

    for size in [64usize, 256].iter() {
        let spectrum = transform_2d(test_grid(*size, *size)).unwrap();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("square", size), size, |b, _| {
            b.iter_batched(
                || spectrum.clone(),
                |s| black_box(normalize_magnitude(s)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [64u32, 128, 256].iter() {
        let image = image::DynamicImage::ImageLuma8(image::GrayImage::from_fn(
            *size,
            *size,
            |x, y| image::Luma([((x * 7 + y * 13) % 256) as u8]),
        ));

        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(BenchmarkId::new("process_image", size), size, |b, _| {
            b.iter(|| black_box(process_image(&image).unwrap()));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let images: Vec<image::DynamicImage> = (0..8u32)
        .map(|i| {
            image::DynamicImage::ImageLuma8(image::GrayImage::from_fn(64, 64, move |x, y| {
                image::Luma([((x + y + i) % 256) as u8])
            }))
        })
        .collect();

    c.bench_function("process_batch_8x64x64", |b| {
        b.iter(|| black_box(pipeline::process_batch(&images)));
    });
}

criterion_group!(
    benches,
    bench_plan_construction,
    bench_1d_pass,
    bench_transform_2d,
    bench_normalize_magnitude,
    bench_full_pipeline,
    bench_batch,
);

criterion_main!(benches);
