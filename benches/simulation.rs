//! benches/simulation.rs
//! Run with:  cargo bench --bench simulation
//! HTML:      target/criterion/report/index.html

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use stock_simulator::{
    StepParams, history::synthetic::synthesize_from_base, project_trading_days, simulate_step,
};
use time::macros::date;

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const PROJECTION_LENGTHS: &[usize] = &[30, 365, 3_650];
const VOLATILITIES: &[f64] = &[0.0, 0.2, 0.8];

pub fn bench_synthesis(c: &mut Criterion) {
    let today = date!(2026 - 10 - 19);
    c.bench_function("synthesize_365", |b| {
        b.iter(|| black_box(synthesize_from_base(black_box(175.0), today)))
    });
}

pub fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("trading_day_projection");
    let from = date!(2026 - 10 - 19);

    for &n in PROJECTION_LENGTHS {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(project_trading_days(from, n)))
        });
    }

    group.finish();
}

pub fn bench_gbm_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbm_step");
    let mut rng = StdRng::seed_from_u64(42);

    for &sigma in VOLATILITIES {
        let params = StepParams::new(100.0, Some(0.1), Some(sigma)).unwrap();
        let id = BenchmarkId::from_parameter(format!("sigma_{sigma}"));
        group.bench_function(id, |b| b.iter(|| black_box(simulate_step(&params, &mut rng).unwrap())));
    }

    group.finish();
}

criterion_group!(benches, bench_synthesis, bench_projection, bench_gbm_step);
criterion_main!(benches);
