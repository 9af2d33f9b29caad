// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog lookups and animation phase math.
//!
//! Measures the performance of:
//! - Registry filtering by category
//! - Slug lookup and substring search
//! - The per-frame phase helpers every preview calls

use criterion::{criterion_group, criterion_main, Criterion};
use glint::catalog::{self, Category};
use glint::ui::state::animation;
use std::hint::black_box;

/// Benchmark registry filtering and lookups.
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("by_category", |b| {
        b.iter(|| {
            for category in Category::ALL {
                let count = catalog::by_category(black_box(category)).count();
                black_box(count);
            }
        });
    });

    group.bench_function("find", |b| {
        b.iter(|| {
            black_box(catalog::find(black_box("pulse-ring")));
            black_box(catalog::find(black_box("no-such-slug")));
        });
    });

    group.bench_function("search", |b| {
        b.iter(|| {
            black_box(catalog::search(black_box("bu")));
        });
    });

    group.finish();
}

/// Benchmark the phase helpers called once per animated element per frame.
fn bench_phase_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    group.bench_function("cycle_phase", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..1000 {
                acc += animation::cycle_phase(black_box(i as f32 * 0.016), 2.4);
            }
            black_box(acc);
        });
    });

    group.bench_function("ease_out_bounce", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..1000 {
                acc += animation::ease_out_bounce(black_box(i as f32 / 1000.0));
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_registry, bench_phase_math);
criterion_main!(benches);
