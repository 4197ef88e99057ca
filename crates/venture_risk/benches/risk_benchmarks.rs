//! Criterion benchmarks for venture_risk analytics.
//!
//! Benchmarks cover:
//! - Risk metric computation for varying trial counts
//! - Scenario comparison with varying scenario counts
//! - A small sensitivity sweep end to end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use venture_core::types::{Scenario, ScenarioParameter, SimulationResult};
use venture_engine::mc::MonteCarloEngine;
use venture_risk::metrics::{compute_risk_metrics, npv_histogram};
use venture_risk::scenarios::{compare_scenarios, sensitivity_analysis, ParameterRange};

fn scenario(name: &str, revenue: f64) -> Scenario {
    Scenario::builder()
        .name(name)
        .initial_investment(100_000.0)
        .revenue(revenue, 5_000.0)
        .cost(15_000.0, 3_000.0)
        .build()
        .unwrap()
}

fn simulate(n_trials: usize, revenue: f64) -> SimulationResult {
    MonteCarloEngine::with_simulations(n_trials)
        .unwrap()
        .simulate(&scenario("Bench", revenue))
}

/// Benchmark risk metrics and histogram over one result.
fn bench_risk_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_metrics");

    for n_trials in [1_000, 10_000, 100_000] {
        let result = simulate(n_trials, 25_000.0);
        group.bench_with_input(BenchmarkId::new("compute", n_trials), &result, |b, r| {
            b.iter(|| compute_risk_metrics(black_box(r)));
        });
        group.bench_with_input(BenchmarkId::new("histogram", n_trials), &result, |b, r| {
            b.iter(|| npv_histogram(black_box(r), 50));
        });
    }

    group.finish();
}

/// Benchmark ranking of many scenarios.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_scenarios");

    for n_scenarios in [2, 8, 32] {
        let results: Vec<SimulationResult> = (0..n_scenarios)
            .map(|i| simulate(5_000, 20_000.0 + 500.0 * i as f64))
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(n_scenarios),
            &results,
            |b, results| {
                b.iter(|| compare_scenarios(black_box(results)));
            },
        );
    }

    group.finish();
}

/// Benchmark a five-point revenue sweep.
fn bench_sensitivity(c: &mut Criterion) {
    let engine = MonteCarloEngine::with_simulations(2_000).unwrap();
    let base = scenario("Base", 25_000.0);
    let ranges =
        [ParameterRange::new(ScenarioParameter::RevenueMean, 15_000.0, 35_000.0, 5).unwrap()];

    let mut group = c.benchmark_group("sensitivity");
    group.sample_size(10);
    group.bench_function("revenue_mean_5_points", |b| {
        b.iter(|| sensitivity_analysis(black_box(&base), &engine, &ranges));
    });
    group.finish();
}

criterion_group!(benches, bench_risk_metrics, bench_compare, bench_sensitivity);
criterion_main!(benches);
