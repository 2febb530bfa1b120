//! Criterion micro-benchmarks comparing the five layout strategies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polystore_bench::{REFERENCE_LEN, STRESS_LEN};
use polystore_core::Strategy;
use polystore_driver::strategies;

/// Benchmark: one full strategy run (populate + timed traversal) per
/// layout at the reference length.
fn bench_run_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_10k");
    for strategy in strategies() {
        group.bench_function(strategy.label(), |b| {
            b.iter(|| {
                let outcome = strategy.run(black_box(REFERENCE_LEN)).unwrap();
                black_box(outcome.readings.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: the same comparison at 10x the element count, where the
/// layout differences show up as cache pressure.
fn bench_run_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_100k");
    group.sample_size(20);
    for strategy in strategies() {
        group.bench_function(strategy.label(), |b| {
            b.iter(|| {
                let outcome = strategy.run(black_box(STRESS_LEN)).unwrap();
                black_box(outcome.readings.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run_reference, bench_run_stress);
criterion_main!(benches);
