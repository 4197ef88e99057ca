//! Scenario file loading.
//!
//! A scenario file is a TOML document with one `[[scenario]]` table per
//! scenario:
//!
//! ```toml
//! [[scenario]]
//! name = "Conservative"
//! initial_investment = 80000.0
//! revenue_mean = 20000.0
//! revenue_std = 3000.0
//! cost_mean = 12000.0
//! cost_std = 2000.0
//! # inflation_rate, market_volatility and time_horizon are optional
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use venture_core::types::{Scenario, ScenarioSpec};

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    scenario: Vec<ScenarioSpec>,
}

/// Loads and validates every scenario of a TOML file.
///
/// # Errors
///
/// - `CliError::FileNotFound` / `CliError::Io` if the file cannot be read
/// - `CliError::Parse` for malformed TOML or a file without scenarios
/// - `CliError::Validation` for the first invalid scenario
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let scenarios = parse_scenarios(&content).map_err(|err| match err {
        CliError::Parse { message, .. } => CliError::Parse {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })?;
    debug!(path = %path.display(), count = scenarios.len(), "Scenarios loaded");
    Ok(scenarios)
}

/// Parses and validates scenarios from TOML text.
pub fn parse_scenarios(content: &str) -> Result<Vec<Scenario>> {
    let file: ScenarioFile = toml::from_str(content).map_err(|e| CliError::Parse {
        path: "<input>".to_string(),
        message: e.to_string(),
    })?;
    if file.scenario.is_empty() {
        return Err(CliError::Parse {
            path: "<input>".to_string(),
            message: "no [[scenario]] tables found".to_string(),
        });
    }
    file.scenario
        .into_iter()
        .map(|spec| Scenario::from_spec(spec).map_err(CliError::from))
        .collect()
}

/// Picks a scenario by name, or the first one when `name` is `None`.
pub fn select_scenario(scenarios: Vec<Scenario>, name: Option<&str>) -> Result<Scenario> {
    match name {
        None => scenarios
            .into_iter()
            .next()
            .ok_or_else(|| CliError::InvalidArgument("no scenarios available".to_string())),
        Some(name) => scenarios
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| CliError::InvalidArgument(format!("Unknown scenario: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venture_core::types::ValidationError;

    const TWO: &str = r#"
[[scenario]]
name = "Conservative"
initial_investment = 80000.0
revenue_mean = 20000.0
revenue_std = 3000.0
cost_mean = 12000.0
cost_std = 2000.0

[[scenario]]
name = "Aggressive"
initial_investment = 150000.0
revenue_mean = 40000.0
revenue_std = 10000.0
cost_mean = 20000.0
cost_std = 5000.0
market_volatility = 0.25
time_horizon = 24
"#;

    #[test]
    fn test_parse_with_defaults() {
        let scenarios = parse_scenarios(TWO).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name(), "Conservative");
        assert_eq!(scenarios[0].time_horizon(), 12);
        assert_eq!(scenarios[0].inflation_rate(), 0.03);
        assert_eq!(scenarios[1].market_volatility(), 0.25);
        assert_eq!(scenarios[1].time_horizon(), 24);
    }

    #[test]
    fn test_parse_rejects_invalid_scenario() {
        let text = TWO.replace("time_horizon = 24", "time_horizon = 0");
        let err = parse_scenarios(&text).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::NonPositiveHorizon { value: 0 })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(matches!(parse_scenarios(""), Err(CliError::Parse { .. })));
        assert!(matches!(
            parse_scenarios("[[scenario]]\nname = 3"),
            Err(CliError::Parse { .. })
        ));
    }

    #[test]
    fn test_select_scenario() {
        let scenarios = parse_scenarios(TWO).unwrap();
        assert_eq!(
            select_scenario(scenarios.clone(), None).unwrap().name(),
            "Conservative"
        );
        assert_eq!(
            select_scenario(scenarios.clone(), Some("Aggressive"))
                .unwrap()
                .name(),
            "Aggressive"
        );
        assert!(select_scenario(scenarios, Some("Missing")).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scenarios(Path::new("/nonexistent/scenarios.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
