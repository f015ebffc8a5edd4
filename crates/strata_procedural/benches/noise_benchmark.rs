//! Benchmark for noise generation performance.
//!
//! TARGET: 1,000,000 samples per second
//!
//! Run with: cargo bench --package strata_procedural --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use strata_procedural::{FractalParams, NoiseSource, PerlinNoise, Seed, SimplexNoise};

fn benchmark_single_sample(c: &mut Criterion) {
    let perlin = PerlinNoise::new(Seed::new(42));
    let simplex = SimplexNoise::new(Seed::new(42));

    let mut group = c.benchmark_group("single_noise_sample");
    group.bench_function("perlin", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(perlin.noise(black_box(x), black_box(x * 0.7)))
        });
    });
    group.bench_function("simplex", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(simplex.noise(black_box(x), black_box(x * 0.7)))
        });
    });
    group.finish();
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = SimplexNoise::new(Seed::new(42));

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_noise_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = f64::from(i % 1000) * 0.1;
                let y = f64::from(i / 1000) * 0.1;
                black_box(noise.noise(x, y));
            }
        });
    });

    group.finish();
}

fn benchmark_octave_noise(c: &mut Criterion) {
    let noise = SimplexNoise::new(Seed::new(42));

    c.bench_function("octave_noise_6_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.octave_noise(black_box(x), black_box(x * 0.7), 6, 0.5, 2.0))
        });
    });
}

fn benchmark_generate_grid(c: &mut Criterion) {
    let perlin = PerlinNoise::new(Seed::new(42));
    let simplex = SimplexNoise::new(Seed::new(42));
    let fractal = FractalParams::default();

    let mut group = c.benchmark_group("generate_grid_256");
    group.throughput(Throughput::Elements(256 * 256));
    group.sample_size(20);

    group.bench_function("perlin", |b| {
        b.iter(|| black_box(perlin.generate_grid(256, 256, 50.0, &fractal)));
    });
    group.bench_function("simplex", |b| {
        b.iter(|| black_box(simplex.generate_grid(256, 256, 50.0, &fractal)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_octave_noise,
    benchmark_generate_grid,
);
criterion_main!(benches);
