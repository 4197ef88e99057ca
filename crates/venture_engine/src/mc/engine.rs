//! Monte Carlo simulation engine.
//!
//! [`MonteCarloEngine`] runs `n_simulations` independent trials of the
//! cash-flow model for one scenario and aggregates them into a
//! [`SimulationResult`].
//!
//! # Reproducibility
//!
//! The engine holds no mutable state. Trial `i` of stream `s` draws from a
//! generator seeded with `trial_seed(stream_seed(base_seed, s), i)`, so:
//!
//! - two engines with the same configuration produce identical results
//! - parallel and sequential execution produce identical results
//! - the result of a call does not depend on earlier calls

use rayon::prelude::*;
use tracing::debug_span;
use venture_core::types::{Scenario, SimulationResult, TrialOutcome};

use super::cashflow::CashFlowModel;
use super::config::EngineConfig;
use super::error::ConfigError;
use super::workspace::TrialWorkspace;
use crate::rng::{stream_seed, trial_seed, VentureRng};

/// Monte Carlo engine for business scenarios.
///
/// # Examples
///
/// ```rust
/// use venture_core::types::Scenario;
/// use venture_engine::mc::MonteCarloEngine;
///
/// let scenario = Scenario::builder()
///     .name("Base")
///     .initial_investment(100_000.0)
///     .revenue(25_000.0, 5_000.0)
///     .cost(15_000.0, 3_000.0)
///     .build()
///     .unwrap();
///
/// let engine = MonteCarloEngine::with_simulations(2_000).unwrap();
/// let result = engine.simulate(&scenario);
///
/// assert_eq!(result.n_trials(), 2_000);
/// assert_eq!(result.var_95(), result.percentile_5());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloEngine {
    config: EngineConfig,
}

impl MonteCarloEngine {
    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates an engine with `n_simulations` trials and default settings
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSimulationCount` for 0 or more than
    /// 10,000,000 trials.
    pub fn with_simulations(n_simulations: usize) -> Result<Self, ConfigError> {
        let config = EngineConfig::builder()
            .n_simulations(n_simulations)
            .build()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of trials per call.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.config.n_simulations()
    }

    /// Simulates `scenario` on stream 0.
    ///
    /// Never fails for a validated scenario.
    pub fn simulate(&self, scenario: &Scenario) -> SimulationResult {
        self.simulate_stream(scenario, 0)
    }

    /// Simulates `scenario` on the random stream `stream_id`.
    ///
    /// Different streams give statistically independent results for the
    /// same scenario.
    pub fn simulate_stream(&self, scenario: &Scenario, stream_id: u64) -> SimulationResult {
        let n_trials = self.config.n_simulations();
        let parallel = self.config.should_parallelize(n_trials);
        let span = debug_span!(
            "simulate",
            scenario = scenario.name(),
            n_trials,
            stream_id,
            parallel
        );
        let _enter = span.enter();

        let model = CashFlowModel::new(scenario);
        let stream = stream_seed(self.config.seed(), stream_id);

        let outcomes: Vec<TrialOutcome> = if parallel {
            (0..n_trials)
                .into_par_iter()
                .map_init(
                    || TrialWorkspace::new(model.n_periods()),
                    |workspace, i| run_trial(&model, stream, i, workspace),
                )
                .collect()
        } else {
            let mut workspace = TrialWorkspace::new(model.n_periods());
            (0..n_trials)
                .map(|i| run_trial(&model, stream, i, &mut workspace))
                .collect()
        };

        SimulationResult::from_outcomes(scenario.name(), &outcomes)
    }
}

#[inline]
fn run_trial(
    model: &CashFlowModel,
    stream: u64,
    trial_index: usize,
    workspace: &mut TrialWorkspace,
) -> TrialOutcome {
    let mut rng = VentureRng::from_seed(trial_seed(stream, trial_index as u64));
    model.simulate_trial(&mut rng, workspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario::builder()
            .name("Engine")
            .initial_investment(100_000.0)
            .revenue(25_000.0, 5_000.0)
            .cost(15_000.0, 3_000.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_engine_default() {
        let engine = MonteCarloEngine::default();
        assert_eq!(engine.n_simulations(), 10_000);
        assert_eq!(engine.config().seed(), 42);
    }

    #[test]
    fn test_engine_rejects_zero_trials() {
        assert!(matches!(
            MonteCarloEngine::with_simulations(0),
            Err(ConfigError::InvalidSimulationCount(0))
        ));
    }

    #[test]
    fn test_simulate_length() {
        let engine = MonteCarloEngine::with_simulations(257).unwrap();
        let result = engine.simulate(&scenario());
        assert_eq!(result.n_trials(), 257);
        assert_eq!(result.roi_values().len(), 257);
        assert_eq!(result.break_even_periods().len(), 257);
        assert_eq!(result.scenario_name(), "Engine");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let engine = MonteCarloEngine::with_simulations(500).unwrap();
        let a = engine.simulate(&scenario());
        let b = engine.simulate(&scenario());
        assert_eq!(a, b);
    }

    #[test]
    fn test_streams_differ() {
        let engine = MonteCarloEngine::with_simulations(500).unwrap();
        let a = engine.simulate_stream(&scenario(), 0);
        let b = engine.simulate_stream(&scenario(), 1);
        assert_ne!(a.npv_values(), b.npv_values());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = EngineConfig::builder()
            .n_simulations(3_000)
            .parallel_threshold(usize::MAX)
            .build()
            .unwrap();
        let parallel = EngineConfig::builder()
            .n_simulations(3_000)
            .parallel_threshold(1)
            .build()
            .unwrap();

        let a = MonteCarloEngine::new(sequential).unwrap().simulate(&scenario());
        let b = MonteCarloEngine::new(parallel).unwrap().simulate(&scenario());
        assert_eq!(a, b);
    }
}
