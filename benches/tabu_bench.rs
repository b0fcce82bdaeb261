//! Criterion benchmarks for the tabu search engine.
//!
//! Uses random Euclidean instances to measure per-iteration cost, which is
//! dominated by evaluating the quadratic swap neighborhood.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_tabu::distance::DistanceMatrix;
use tsp_tabu::tabu::{TabuConfig, TabuRunner};

fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    DistanceMatrix::from_points(&points).expect("random points form a valid instance")
}

fn bench_tabu_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_sequential");
    group.sample_size(10);

    for n in [10usize, 25, 50] {
        let matrix = random_instance(n, 42);
        let config = TabuConfig::default().with_max_iterations(100).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| {
                let result = TabuRunner::run(black_box(m), black_box(c));
                black_box(result)
            })
        });
    }

    group.finish();
}

fn bench_tabu_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_parallel");
    group.sample_size(10);

    for n in [25usize, 50, 100] {
        let matrix = random_instance(n, 42);
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_seed(42)
            .with_parallel(true);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| {
                let result = TabuRunner::run(black_box(m), black_box(c));
                black_box(result)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tabu_sequential, bench_tabu_parallel);
criterion_main!(benches);
