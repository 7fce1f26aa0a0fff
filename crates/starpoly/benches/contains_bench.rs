//! Criterion benchmarks for star-polygon membership.
//! Focus sizes: n in {8, 30, 128, 1024, 8192}.
//! Compares the angular binary search against the O(n) edge scan.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, SeedableRng};
use starpoly::star::rand::{
    draw_star_polygon_replay, sample_rect, RadialCfg, ReplayToken, VertexCount,
};
use starpoly::star::{OriginStrategy, StarCfg, StarPolygon};

const CFG: StarCfg = StarCfg {
    origin: OriginStrategy::AreaCentroid,
    tolerance: starpoly::star::Tolerance::Absolute(1e-6),
    validate: true,
};

fn random_star(n: usize, seed: u64) -> StarPolygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_star_polygon_replay(&cfg, ReplayToken { seed, index: 0 })
        .unwrap()
        .preprocess(&CFG)
        .unwrap()
}

fn queries(m: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| sample_rect(&mut rng, Vector2::new(1.0, 1.0), Vector2::new(839.0, 639.0)))
        .collect()
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let qs = queries(1024, 7);
    for &n in &[8usize, 30, 128, 1024, 8192] {
        let star = random_star(n, 43);
        group.bench_with_input(BenchmarkId::new("angular", n), &n, |b, _| {
            b.iter(|| qs.iter().map(|&q| star.contains(q)).count())
        });
        group.bench_with_input(BenchmarkId::new("scan", n), &n, |b, _| {
            b.iter(|| qs.iter().map(|&q| star.contains_scan(q)).count())
        });
    }
    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");
    for &n in &[30usize, 1024, 8192] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_star_polygon_replay(&cfg, ReplayToken { seed: 44, index: 0 }).unwrap();
        group.bench_with_input(BenchmarkId::new("validated", n), &n, |b, _| {
            b.iter(|| poly.clone().preprocess(&CFG).unwrap())
        });
        let unchecked = StarCfg {
            validate: false,
            ..CFG
        };
        group.bench_with_input(BenchmarkId::new("unchecked", n), &n, |b, _| {
            b.iter(|| poly.clone().preprocess(&unchecked).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_preprocess);
criterion_main!(benches);
