//! Compare command implementation
//!
//! Simulates several scenarios with the same engine and ranks them by
//! composite score.

use std::io::Write;
use tracing::info;
use venture_core::types::{Scenario, SimulationResult};
use venture_engine::mc::MonteCarloEngine;
use venture_risk::scenarios::{compare_scenarios, RankedScenario};

use crate::output::{write_ranking, OutputFormat};
use crate::{CliError, Result};

/// Simulates and ranks `scenarios`.
pub fn rank(engine: &MonteCarloEngine, scenarios: &[Scenario]) -> Result<Vec<RankedScenario>> {
    if scenarios.len() < 2 {
        return Err(CliError::InvalidArgument(format!(
            "compare needs at least two scenarios, got {}",
            scenarios.len()
        )));
    }
    let results: Vec<SimulationResult> = scenarios.iter().map(|s| engine.simulate(s)).collect();
    Ok(compare_scenarios(&results)?)
}

/// Run the compare command
pub fn run<W: Write>(
    out: &mut W,
    engine: &MonteCarloEngine,
    scenarios: &[Scenario],
    format: OutputFormat,
) -> Result<()> {
    info!(scenarios = scenarios.len(), "Comparing scenarios");
    let ranking = rank(engine, scenarios)?;
    if let Some(best) = ranking.first() {
        info!(best = %best.scenario_name, score = best.score, "Comparison complete");
    }
    write_ranking(out, format, &ranking)
}
