//! Integration tests for the Monte Carlo engine.
//!
//! Verifies the structural invariants of every simulation result and the
//! statistical plausibility of the reference scenario.

use proptest::prelude::*;
use venture_core::types::Scenario;
use venture_engine::mc::{EngineConfig, MonteCarloEngine};

fn reference_scenario() -> Scenario {
    Scenario::builder()
        .name("Reference")
        .initial_investment(100_000.0)
        .revenue(25_000.0, 5_000.0)
        .cost(15_000.0, 3_000.0)
        .inflation_rate(0.03)
        .market_volatility(0.15)
        .time_horizon(12)
        .build()
        .unwrap()
}

#[test]
fn test_reference_scenario_is_profitable() {
    let engine = MonteCarloEngine::with_simulations(5_000).unwrap();
    let result = engine.simulate(&reference_scenario());

    assert!(
        result.success_probability() > 50.0 && result.success_probability() < 100.0,
        "success = {}",
        result.success_probability()
    );
    assert!(result.mean_npv() > 0.0, "mean = {}", result.mean_npv());
}

#[test]
fn test_fresh_engines_agree() {
    let config = EngineConfig::builder()
        .n_simulations(2_000)
        .seed(1234)
        .build()
        .unwrap();
    let a = MonteCarloEngine::new(config.clone()).unwrap();
    let b = MonteCarloEngine::new(config).unwrap();

    assert_eq!(
        a.simulate(&reference_scenario()),
        b.simulate(&reference_scenario())
    );
}

#[test]
fn test_call_order_does_not_matter() {
    let engine = MonteCarloEngine::with_simulations(1_000).unwrap();
    let other = reference_scenario()
        .to_builder()
        .name("Other")
        .initial_investment(50_000.0)
        .build()
        .unwrap();

    let first = engine.simulate(&reference_scenario());
    let _ = engine.simulate(&other);
    let second = engine.simulate(&reference_scenario());
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let run = |seed: u64| {
        let config = EngineConfig::builder()
            .n_simulations(500)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloEngine::new(config)
            .unwrap()
            .simulate(&reference_scenario())
    };
    assert_ne!(run(1).mean_npv(), run(2).mean_npv());
}

#[test]
fn test_single_period_horizon() {
    let scenario = reference_scenario()
        .to_builder()
        .time_horizon(1)
        .build()
        .unwrap();
    let result = MonteCarloEngine::with_simulations(200)
        .unwrap()
        .simulate(&scenario);
    assert!(result.break_even_periods().iter().all(|&p| p == 1));
    // One period of ~10k profit never recovers 100k
    assert_eq!(result.success_probability(), 0.0);
}

#[test]
fn test_zero_volatility_scenario() {
    let scenario = Scenario::builder()
        .name("Certain")
        .initial_investment(10_000.0)
        .revenue(5_000.0, 0.0)
        .cost(1_000.0, 0.0)
        .inflation_rate(0.0)
        .market_volatility(0.0)
        .time_horizon(12)
        .build()
        .unwrap();
    let result = MonteCarloEngine::with_simulations(300)
        .unwrap()
        .simulate(&scenario);
    assert_eq!(result.success_probability(), 100.0);
    assert!(result.std_npv() < 0.01 * result.mean_npv().abs());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_result_invariants(
        investment in 1_000.0f64..500_000.0,
        revenue_mean in 0.0f64..50_000.0,
        revenue_std in 0.0f64..20_000.0,
        cost_mean in 0.0f64..40_000.0,
        cost_std in 0.0f64..10_000.0,
        volatility in 0.0f64..1.0,
        horizon in 1u32..48,
        n_trials in 1usize..400,
    ) {
        let scenario = Scenario::builder()
            .name("Property")
            .initial_investment(investment)
            .revenue(revenue_mean, revenue_std)
            .cost(cost_mean, cost_std)
            .market_volatility(volatility)
            .time_horizon(horizon)
            .build()
            .unwrap();
        let result = MonteCarloEngine::with_simulations(n_trials)
            .unwrap()
            .simulate(&scenario);

        prop_assert_eq!(result.npv_values().len(), n_trials);
        prop_assert_eq!(result.roi_values().len(), n_trials);
        prop_assert_eq!(result.break_even_periods().len(), n_trials);
        prop_assert!(result
            .break_even_periods()
            .iter()
            .all(|&p| (1..=horizon).contains(&p)));
        prop_assert!((0.0..=100.0).contains(&result.success_probability()));
        prop_assert_eq!(result.var_95(), result.percentile_5());
        prop_assert!(result.percentile_5() <= result.percentile_95());
    }
}
