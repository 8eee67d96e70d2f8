//! Benchmarks for tipkarma-core spin planning.
//!
//! Run with: cargo bench -p tipkarma-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tipkarma_core::{compute, plan, should_hide, KarmaWheel};

fn bench_tip_compute(c: &mut Criterion) {
    c.bench_function("compute_tip", |bencher| {
        bencher.iter(|| compute(black_box(123.45), black_box(18)));
    });

    let last = compute(123.45, 18);
    let current = compute(123.45, 20);
    c.bench_function("accuracy_gate", |bencher| {
        bencher.iter(|| should_hide(black_box(&last), black_box(&current), black_box(true)));
    });
}

fn bench_spin_plan(c: &mut Criterion) {
    // One revolution (4 segments) and the capped three (12 segments).
    c.bench_function("plan_single_spin", |bencher| {
        bencher.iter(|| plan(black_box(15), black_box(45.0), black_box(false)));
    });

    c.bench_function("plan_triple_spin", |bencher| {
        bencher.iter(|| plan(black_box(30), black_box(45.0), black_box(true)));
    });
}

fn bench_wheel_composition(c: &mut Criterion) {
    c.bench_function("wheel_spin_sequence", |bencher| {
        bencher.iter(|| {
            let mut wheel = KarmaWheel::default();
            for pct in [20, 5, 25, 0] {
                black_box(wheel.spin(black_box(pct)));
            }
            wheel
        });
    });
}

criterion_group!(benches, bench_tip_compute, bench_spin_plan, bench_wheel_composition);
criterion_main!(benches);
