//! Criterion benchmarks for incremental insertion.
//! Focus sizes: n in {10, 50, 100, 200}, dimension 2.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use delaunay::{Point, Triangulation, TriangulationConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.gen_range(-100.0..100.0);
            let y = rng.gen_range(-100.0..100.0);
            Point::from_euclidean(&[x, y])
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation_build");
    for &n in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("new", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 7),
                |points| {
                    let config = TriangulationConfig {
                        randomize: true,
                        seed: Some(7),
                        ..Default::default()
                    };
                    let _t = Triangulation::new(points, config).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
