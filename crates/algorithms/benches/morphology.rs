//! Benchmarks for morphology primitives

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cranioseg_algorithms::morphology::{
    closing, dilate, erode, opening, threshold, StructuringElement, ThresholdMode,
};
use cranioseg_core::Grid;

fn create_test_image(size: usize) -> Grid<f64> {
    let mut image = Grid::new(size, size);
    // Varied surface with some structure
    for row in 0..size {
        for col in 0..size {
            let v = ((row * 7 + col * 13) % 256) as f64 / 255.0;
            image.set(row, col, v).unwrap();
        }
    }
    image
}

fn bench_erode(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/erode");
    let element = StructuringElement::ellipse(3);
    for size in [128, 256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| erode(black_box(&image), &element).unwrap())
        });
    }
    group.finish();
}

fn bench_dilate(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/dilate");
    let element = StructuringElement::ellipse(3);
    for size in [128, 256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| dilate(black_box(&image), &element).unwrap())
        });
    }
    group.finish();
}

fn bench_opening(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/opening");
    let element = StructuringElement::ellipse(3);
    for size in [128, 256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| opening(black_box(&image), &element).unwrap())
        });
    }
    group.finish();
}

fn bench_closing(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/closing");
    let element = StructuringElement::ellipse(3);
    for size in [128, 256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| closing(black_box(&image), &element).unwrap())
        });
    }
    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/threshold");
    for size in [256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| threshold(black_box(&image), 0.5, ThresholdMode::Binary).unwrap())
        });
    }
    group.finish();
}

fn bench_extent_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/erode_extent");
    let image = create_test_image(512);
    for extent in [3, 5, 11, 21, 41] {
        let element = StructuringElement::ellipse(extent);
        group.bench_with_input(BenchmarkId::from_parameter(extent), &extent, |b, _| {
            b.iter(|| erode(black_box(&image), &element).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_erode,
    bench_dilate,
    bench_opening,
    bench_closing,
    bench_threshold,
    bench_extent_scaling,
);
criterion_main!(benches);
