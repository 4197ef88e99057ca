//! Sensitivity command implementation
//!
//! Sweeps one or more parameters of a base scenario. Ranges are given as
//! `parameter=min:max:steps`, e.g. `revenue_mean=20000:30000:5`.

use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use venture_core::types::{Scenario, ScenarioParameter};
use venture_engine::mc::MonteCarloEngine;
use venture_risk::scenarios::{sensitivity_analysis_with_cancel, CancellationToken, ParameterRange};

use crate::output::{write_sensitivity, OutputFormat};
use crate::{CliError, Result};

/// Parses `parameter=min:max:steps`.
pub fn parse_range(spec: &str) -> Result<ParameterRange> {
    let invalid = || {
        CliError::InvalidArgument(format!(
            "Invalid range '{}': expected parameter=min:max:steps",
            spec
        ))
    };

    let (name, bounds) = spec.split_once('=').ok_or_else(invalid)?;
    let parameter = ScenarioParameter::from_str(name)?;

    let parts: Vec<&str> = bounds.split(':').map(str::trim).collect();
    let [min, max, steps] = parts.as_slice() else {
        return Err(invalid());
    };
    let min: f64 = min.parse().map_err(|_| invalid())?;
    let max: f64 = max.parse().map_err(|_| invalid())?;
    let steps: usize = steps.parse().map_err(|_| invalid())?;

    Ok(ParameterRange::new(parameter, min, max, steps)?)
}

/// Run the sensitivity command
pub fn run<W: Write>(
    out: &mut W,
    engine: &MonteCarloEngine,
    base: &Scenario,
    ranges: &[String],
    timeout: Option<Duration>,
    format: OutputFormat,
) -> Result<()> {
    if ranges.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one --range is required".to_string(),
        ));
    }
    let ranges = ranges
        .iter()
        .map(|spec| parse_range(spec))
        .collect::<Result<Vec<_>>>()?;

    let token = match timeout {
        Some(timeout) => CancellationToken::with_timeout(timeout),
        None => CancellationToken::new(),
    };

    info!(
        scenario = base.name(),
        parameters = ranges.len(),
        "Starting sensitivity analysis"
    );
    let analysis = sensitivity_analysis_with_cancel(base, engine, &ranges, &token)?;
    if analysis.cancelled {
        warn!("Sensitivity analysis timed out; reporting partial results");
    }

    write_sensitivity(out, format, base.name(), &analysis)
}
