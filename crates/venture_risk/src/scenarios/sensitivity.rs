//! One-at-a-time parameter sensitivity sweeps.
//!
//! Each swept parameter is varied over an evenly spaced grid while every
//! other field keeps its base value. Every grid point is a full `simulate`
//! call on stream 0, so all points of a sweep share the same random draws
//! and differences between points come from the parameter alone.

use tracing::{debug, info};
use venture_core::math::stats;
use venture_core::types::{Scenario, ScenarioParameter};
use venture_engine::mc::MonteCarloEngine;

use super::cancellation::{Cancellable, CancellationToken};
use super::error::SensitivityError;

/// Sweep range of one parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterRange {
    parameter: ScenarioParameter,
    min: f64,
    max: f64,
    steps: usize,
}

impl ParameterRange {
    /// Creates a range of `steps` evenly spaced values over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `SensitivityError::InvalidRange` if a bound is not finite,
    /// `min > max` or `steps == 0`.
    pub fn new(
        parameter: ScenarioParameter,
        min: f64,
        max: f64,
        steps: usize,
    ) -> Result<Self, SensitivityError> {
        let invalid = |reason: &str| SensitivityError::InvalidRange {
            parameter,
            reason: reason.to_string(),
        };
        if !min.is_finite() || !max.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if min > max {
            return Err(invalid("min must not exceed max"));
        }
        if steps == 0 {
            return Err(invalid("steps must be at least 1"));
        }
        Ok(Self {
            parameter,
            min,
            max,
            steps,
        })
    }

    /// Swept parameter.
    #[inline]
    pub fn parameter(&self) -> ScenarioParameter {
        self.parameter
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of grid points.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Grid values, inclusive of both bounds. A single step yields `[min]`.
    pub fn values(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.min];
        }
        let last = (self.steps - 1) as f64;
        (0..self.steps)
            .map(|i| {
                if i == self.steps - 1 {
                    self.max
                } else {
                    self.min + (self.max - self.min) * i as f64 / last
                }
            })
            .collect()
    }
}

/// Sweep output for one parameter.
///
/// The three per-value vectors are index-aligned. `values` holds the values
/// actually simulated (time horizons are rounded to whole periods).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSensitivity {
    /// Swept parameter
    pub parameter: ScenarioParameter,
    /// Simulated parameter values
    pub values: Vec<f64>,
    /// Mean NPV per value
    pub mean_npv_per_value: Vec<f64>,
    /// Success probability per value
    pub success_prob_per_value: Vec<f64>,
    /// `std(mean_npv_per_value) / mean(mean_npv_per_value)`, 0 when the
    /// mean is 0 or nothing was simulated
    pub elasticity: f64,
}

impl ParameterSensitivity {
    fn new(parameter: ScenarioParameter, capacity: usize) -> Self {
        Self {
            parameter,
            values: Vec::with_capacity(capacity),
            mean_npv_per_value: Vec::with_capacity(capacity),
            success_prob_per_value: Vec::with_capacity(capacity),
            elasticity: 0.0,
        }
    }

    fn finish(mut self) -> Self {
        self.elasticity = elasticity(&self.mean_npv_per_value);
        self
    }

    /// Number of simulated grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no grid point was simulated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a sensitivity analysis.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityAnalysis {
    /// Per-parameter output, in request order
    pub parameters: Vec<ParameterSensitivity>,
    /// `true` if the sweep stopped early; the last entry may be partial and
    /// later parameters are missing
    pub cancelled: bool,
}

impl SensitivityAnalysis {
    /// Output for `parameter`, if it was swept.
    pub fn get(&self, parameter: ScenarioParameter) -> Option<&ParameterSensitivity> {
        self.parameters.iter().find(|p| p.parameter == parameter)
    }
}

/// Runs a one-at-a-time sensitivity analysis.
///
/// # Errors
///
/// - `SensitivityError::InvalidRange` if a parameter is listed twice
/// - `SensitivityError::Validation` if any grid value yields an invalid
///   scenario; checked for every point before the first simulation
///
/// # Examples
///
/// ```
/// use venture_core::types::{Scenario, ScenarioParameter};
/// use venture_engine::mc::MonteCarloEngine;
/// use venture_risk::scenarios::{sensitivity_analysis, ParameterRange};
///
/// let base = Scenario::builder()
///     .name("Base")
///     .initial_investment(100_000.0)
///     .revenue(25_000.0, 5_000.0)
///     .cost(15_000.0, 3_000.0)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::with_simulations(500).unwrap();
/// let ranges = [ParameterRange::new(ScenarioParameter::RevenueMean, 20_000.0, 30_000.0, 3).unwrap()];
///
/// let analysis = sensitivity_analysis(&base, &engine, &ranges).unwrap();
/// let revenue = analysis.get(ScenarioParameter::RevenueMean).unwrap();
/// assert_eq!(revenue.values, vec![20_000.0, 25_000.0, 30_000.0]);
/// assert!(revenue.mean_npv_per_value[0] < revenue.mean_npv_per_value[2]);
/// ```
pub fn sensitivity_analysis(
    base: &Scenario,
    engine: &MonteCarloEngine,
    ranges: &[ParameterRange],
) -> Result<SensitivityAnalysis, SensitivityError> {
    sensitivity_analysis_with_cancel(base, engine, ranges, &CancellationToken::new())
}

/// [`sensitivity_analysis`] that checks `token` before every simulation.
///
/// A cancelled sweep returns the points completed so far with
/// `cancelled == true`; completed points are never discarded.
pub fn sensitivity_analysis_with_cancel<C>(
    base: &Scenario,
    engine: &MonteCarloEngine,
    ranges: &[ParameterRange],
    token: &C,
) -> Result<SensitivityAnalysis, SensitivityError>
where
    C: Cancellable + ?Sized,
{
    let plan = build_plan(base, ranges)?;
    let mut analysis = SensitivityAnalysis::default();

    for (parameter, scenarios) in plan {
        let mut sweep = ParameterSensitivity::new(parameter, scenarios.len());

        for scenario in &scenarios {
            if token.is_cancelled() {
                info!(
                    %parameter,
                    completed = sweep.len(),
                    "Sensitivity sweep cancelled"
                );
                analysis.parameters.push(sweep.finish());
                analysis.cancelled = true;
                return Ok(analysis);
            }

            let value = scenario.parameter(parameter);
            let result = engine.simulate(scenario);
            debug!(
                %parameter,
                value,
                mean_npv = result.mean_npv(),
                success_probability = result.success_probability(),
                "Sensitivity point evaluated"
            );

            sweep.values.push(value);
            sweep.mean_npv_per_value.push(result.mean_npv());
            sweep
                .success_prob_per_value
                .push(result.success_probability());
        }

        analysis.parameters.push(sweep.finish());
    }

    Ok(analysis)
}

/// Validates every override up front.
fn build_plan(
    base: &Scenario,
    ranges: &[ParameterRange],
) -> Result<Vec<(ScenarioParameter, Vec<Scenario>)>, SensitivityError> {
    let mut plan: Vec<(ScenarioParameter, Vec<Scenario>)> = Vec::with_capacity(ranges.len());
    for range in ranges {
        let parameter = range.parameter();
        if plan.iter().any(|(p, _)| *p == parameter) {
            return Err(SensitivityError::InvalidRange {
                parameter,
                reason: "parameter listed more than once".to_string(),
            });
        }
        let scenarios = range
            .values()
            .into_iter()
            .map(|value| base.with_parameter(parameter, value))
            .collect::<Result<Vec<_>, _>>()?;
        plan.push((parameter, scenarios));
    }
    Ok(plan)
}

/// Coefficient of variation of the per-value mean NPVs.
fn elasticity(means: &[f64]) -> f64 {
    let mean = stats::mean(means);
    if mean == 0.0 {
        0.0
    } else {
        stats::std_dev(means) / mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> Scenario {
        Scenario::builder()
            .name("Sweep")
            .initial_investment(100_000.0)
            .revenue(25_000.0, 5_000.0)
            .cost(15_000.0, 3_000.0)
            .build()
            .unwrap()
    }

    fn engine() -> MonteCarloEngine {
        MonteCarloEngine::with_simulations(200).unwrap()
    }

    #[test]
    fn test_range_values() {
        let range = ParameterRange::new(ScenarioParameter::CostMean, 10.0, 20.0, 5).unwrap();
        assert_eq!(range.values(), vec![10.0, 12.5, 15.0, 17.5, 20.0]);

        let single = ParameterRange::new(ScenarioParameter::CostMean, 3.0, 9.0, 1).unwrap();
        assert_eq!(single.values(), vec![3.0]);

        let point = ParameterRange::new(ScenarioParameter::CostMean, 4.0, 4.0, 3).unwrap();
        assert_eq!(point.values(), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_range_rejections() {
        let p = ScenarioParameter::RevenueStd;
        assert!(ParameterRange::new(p, 2.0, 1.0, 3).is_err());
        assert!(ParameterRange::new(p, 0.0, 1.0, 0).is_err());
        assert!(ParameterRange::new(p, f64::NAN, 1.0, 3).is_err());
        assert!(ParameterRange::new(p, 0.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_elasticity() {
        assert_eq!(elasticity(&[]), 0.0);
        assert_eq!(elasticity(&[-1.0, 1.0]), 0.0);
        assert_eq!(elasticity(&[5.0, 5.0]), 0.0);
        // mean 2, population std 1
        assert_relative_eq!(elasticity(&[1.0, 3.0]), 0.5);
    }

    #[test]
    fn test_sweep_matches_direct_simulation() {
        let engine = engine();
        let ranges =
            [ParameterRange::new(ScenarioParameter::InitialInvestment, 50_000.0, 150_000.0, 3)
                .unwrap()];
        let analysis = sensitivity_analysis(&base(), &engine, &ranges).unwrap();
        assert!(!analysis.cancelled);

        let sweep = &analysis.parameters[0];
        assert_eq!(sweep.len(), 3);
        let direct = engine.simulate(
            &base()
                .with_parameter(ScenarioParameter::InitialInvestment, 100_000.0)
                .unwrap(),
        );
        assert_eq!(sweep.mean_npv_per_value[1], direct.mean_npv());
        assert_eq!(sweep.success_prob_per_value[1], direct.success_probability());

        // Common random numbers: investment shifts NPV exactly
        assert_relative_eq!(
            sweep.mean_npv_per_value[0] - sweep.mean_npv_per_value[2],
            100_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_time_horizon_values_are_rounded() {
        let ranges =
            [ParameterRange::new(ScenarioParameter::TimeHorizon, 6.0, 12.0, 4).unwrap()];
        let analysis = sensitivity_analysis(&base(), &engine(), &ranges).unwrap();
        assert_eq!(
            analysis.parameters[0].values,
            vec![6.0, 8.0, 10.0, 12.0]
        );
    }

    #[test]
    fn test_invalid_override_fails_before_simulating() {
        let ranges = [
            ParameterRange::new(ScenarioParameter::RevenueMean, 1.0, 2.0, 2).unwrap(),
            ParameterRange::new(ScenarioParameter::InitialInvestment, -10.0, 10.0, 3).unwrap(),
        ];
        let err = sensitivity_analysis(&base(), &engine(), &ranges).unwrap_err();
        assert!(matches!(err, SensitivityError::Validation(_)));
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let range = ParameterRange::new(ScenarioParameter::CostStd, 0.0, 1.0, 2).unwrap();
        let err = sensitivity_analysis(&base(), &engine(), &[range.clone(), range]).unwrap_err();
        assert!(matches!(
            err,
            SensitivityError::InvalidRange {
                parameter: ScenarioParameter::CostStd,
                ..
            }
        ));
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let ranges = [
            ParameterRange::new(ScenarioParameter::CostMean, 1.0, 2.0, 2).unwrap(),
            ParameterRange::new(ScenarioParameter::RevenueMean, 1.0, 2.0, 2).unwrap(),
        ];
        let analysis =
            sensitivity_analysis_with_cancel(&base(), &engine(), &ranges, &token).unwrap();
        assert!(analysis.cancelled);
        assert_eq!(analysis.parameters.len(), 1);
        assert!(analysis.parameters[0].is_empty());
        assert_eq!(analysis.parameters[0].elasticity, 0.0);
        assert!(analysis.get(ScenarioParameter::RevenueMean).is_none());
    }

    #[test]
    fn test_empty_ranges() {
        let analysis = sensitivity_analysis(&base(), &engine(), &[]).unwrap();
        assert!(analysis.parameters.is_empty());
        assert!(!analysis.cancelled);
    }
}
