//! Benchmark for hydraulic erosion.
//!
//! Run with: cargo bench --package strata_procedural --bench erosion_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strata_procedural::{ErosionParams, FractalParams, HydraulicErosion, NoiseSource, Seed, SimplexNoise};

fn benchmark_droplets(c: &mut Criterion) {
    let terrain = SimplexNoise::new(Seed::new(42)).generate_grid(128, 128, 40.0, &FractalParams::default());

    let mut group = c.benchmark_group("erosion_128x128");
    group.sample_size(10);

    for iterations in [1_000u32, 5_000] {
        let params = ErosionParams {
            iterations,
            ..ErosionParams::default()
        };
        group.throughput(Throughput::Elements(u64::from(iterations)));
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &params, |b, params| {
            b.iter(|| {
                let mut eroder = HydraulicErosion::new(Seed::new(42));
                black_box(eroder.erode(&terrain, params))
            });
        });
    }

    group.finish();
}

fn benchmark_brush_radius(c: &mut Criterion) {
    let terrain = SimplexNoise::new(Seed::new(7)).generate_grid(128, 128, 40.0, &FractalParams::default());

    let mut group = c.benchmark_group("erosion_radius");
    group.sample_size(10);

    for radius in [0u32, 3, 6] {
        let params = ErosionParams {
            iterations: 2_000,
            erosion_radius: radius,
            ..ErosionParams::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(radius), &params, |b, params| {
            b.iter(|| {
                let mut eroder = HydraulicErosion::new(Seed::new(7));
                black_box(eroder.erode(&terrain, params))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_droplets, benchmark_brush_radius);
criterion_main!(benches);
