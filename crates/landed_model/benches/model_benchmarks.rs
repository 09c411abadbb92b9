//! Criterion benchmarks for the cost compiler hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use landed_model::compiler::{compute_itemised, compute_landed_value};
use landed_model::params::CostSnapshot;

fn bench_compute_itemised(c: &mut Criterion) {
    let snapshot = CostSnapshot::<f64>::default();
    c.bench_function("compute_itemised/default", |b| {
        b.iter(|| compute_itemised(black_box(&snapshot)))
    });
}

fn bench_compute_landed_value(c: &mut Criterion) {
    let snapshot = CostSnapshot::<f64>::default();
    c.bench_function("compute_landed_value/default", |b| {
        b.iter(|| compute_landed_value(black_box(&snapshot)))
    });
}

criterion_group!(benches, bench_compute_itemised, bench_compute_landed_value);
criterion_main!(benches);
