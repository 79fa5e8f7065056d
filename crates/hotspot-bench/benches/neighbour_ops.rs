//! Criterion benchmarks for neighbour construction and traversal.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hotspot_bench::{random_graph, random_points};
use hotspot_space::{build_neighbours, EdgeBehavior, Grid2D, Neighbourhood};
use std::hint::black_box;

/// Benchmark: build the neighbour graph of 1K, 2K and 5K random points.
fn bench_build_neighbours(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_neighbours");
    group.sample_size(10);
    for n in [1_000usize, 2_000, 5_000] {
        let (x, y) = random_points(n, (n as f64).sqrt(), 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let nbs = build_neighbours(&x, &y).unwrap();
                black_box(&nbs);
            });
        });
    }
    group.finish();
}

/// Benchmark: neighbour means of every site, explicit graph vs implicit grid.
fn bench_neighbour_mean_10k(c: &mut Criterion) {
    let graph = random_graph(10_000, 7).unwrap();
    let grid = Grid2D::square(100, EdgeBehavior::Absorb).unwrap();
    let values: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.01).sin()).collect();

    c.bench_function("neighbour_mean_graph_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..graph.len() {
                acc += graph.neighbour_mean(i, &values).unwrap_or(0.0);
            }
            black_box(acc);
        });
    });

    c.bench_function("neighbour_mean_grid_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..grid.site_count() {
                acc += grid.neighbour_mean(i, &values).unwrap_or(0.0);
            }
            black_box(acc);
        });
    });
}

criterion_group!(benches, bench_build_neighbours, bench_neighbour_mean_10k);
criterion_main!(benches);
