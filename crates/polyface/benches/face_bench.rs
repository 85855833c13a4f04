//! Criterion benchmarks for face geometry and splitting.
//! Focus sizes: n in {3, 8, 32, 128}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::{vector, Vector3};
use polyface::{Face, SplitCounts};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Star-shaped polygon with jittered radii (mildly concave for larger n).
fn random_star(n: usize, seed: u64) -> (Face, Vec<Vector3<f64>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = std::f64::consts::TAU / n as f64;
    let points = (0..n)
        .map(|k| {
            let r: f64 = rng.gen_range(0.5..1.0);
            let th = step * k as f64;
            vector![r * th.cos(), r * th.sin(), rng.gen_range(-0.01..0.01)]
        })
        .collect();
    (Face::new((0..n).collect()), points)
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("face_geometry");
    for &n in &[3usize, 8, 32, 128] {
        let (f, pts) = random_star(n, 41);
        group.bench_with_input(BenchmarkId::new("normal", n), &n, |b, _| {
            b.iter(|| f.normal(&pts))
        });
        group.bench_with_input(BenchmarkId::new("centre", n), &n, |b, _| {
            b.iter(|| f.centre(&pts))
        });
        let moved: Vec<_> = pts.iter().map(|p| p * 1.01).collect();
        group.bench_with_input(BenchmarkId::new("swept_vol", n), &n, |b, _| {
            b.iter(|| f.swept_vol(&pts, &moved))
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("face_split");
    for &n in &[3usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("triangles", n), &n, |b, &n| {
            b.iter_batched(
                || random_star(n, 42),
                |(f, pts)| {
                    let mut out = Vec::with_capacity(f.n_triangles());
                    f.triangles(&pts, &mut out).unwrap();
                    out
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("count_tri_quad", n), &n, |b, &n| {
            let (f, pts) = random_star(n, 43);
            b.iter(|| {
                let counts: SplitCounts = f.n_triangles_quads(&pts).unwrap();
                counts
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_split);
criterion_main!(benches);
