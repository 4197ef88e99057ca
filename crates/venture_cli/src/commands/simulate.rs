//! Simulate command implementation
//!
//! Runs every scenario of a scenario file and reports its risk metrics.

use std::io::Write;
use tracing::info;
use venture_core::types::Scenario;
use venture_engine::mc::MonteCarloEngine;
use venture_risk::metrics::{compute_risk_metrics, npv_histogram};

use crate::output::{write_simulations, OutputFormat, SimulationRecord};
use crate::Result;

/// Default number of NPV histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Simulates `scenarios` and builds one record per scenario.
pub fn simulate_all(
    engine: &MonteCarloEngine,
    scenarios: Vec<Scenario>,
    bins: usize,
) -> Result<Vec<SimulationRecord>> {
    scenarios
        .into_iter()
        .map(|scenario| {
            let result = engine.simulate(&scenario);
            let metrics = compute_risk_metrics(&result)?;
            let histogram = npv_histogram(&result, bins)?;
            info!(
                scenario = scenario.name(),
                mean_npv = metrics.mean_npv,
                success_probability = metrics.success_probability,
                "Simulation complete"
            );
            Ok(SimulationRecord::new(scenario, result, metrics, histogram))
        })
        .collect()
}

/// Run the simulate command
pub fn run<W: Write>(
    out: &mut W,
    engine: &MonteCarloEngine,
    scenarios: Vec<Scenario>,
    bins: usize,
    format: OutputFormat,
) -> Result<()> {
    info!(
        scenarios = scenarios.len(),
        n_simulations = engine.n_simulations(),
        "Starting simulation"
    );
    let records = simulate_all(engine, scenarios, bins)?;
    write_simulations(out, format, &records)
}
