//! Ranking of several simulated scenarios.

use venture_core::types::{DomainError, SimulationResult};

use crate::metrics::{compute_risk_metrics, RiskMetrics};
use crate::parallel::{try_parallel_map, ParallelConfig};

/// Weight of the normalised mean NPV in the composite score.
pub const NPV_WEIGHT: f64 = 0.6;

/// Weight of the success probability in the composite score.
pub const SUCCESS_WEIGHT: f64 = 0.4;

/// One row of a scenario comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedScenario {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Scenario name
    pub scenario_name: String,
    /// Risk metrics of the scenario
    pub metrics: RiskMetrics,
    /// Composite attractiveness score
    pub score: f64,
}

/// Ranks simulation results by composite attractiveness.
///
/// ```text
/// score = 0.6 * mean_npv / |max mean_npv| + 0.4 * success_probability / 100
/// ```
///
/// When the largest mean NPV is 0 the NPV term is normalised by the largest
/// absolute mean instead, and it is 0 when every mean is 0. The ranking is
/// sorted by descending score; equal scores keep their input order.
///
/// A result whose mean NPV and success probability are both at least
/// another's never scores below it.
///
/// # Errors
///
/// Returns `DomainError` if any result has no trials.
///
/// # Examples
///
/// ```
/// use venture_core::types::SimulationResult;
/// use venture_risk::scenarios::compare_scenarios;
///
/// let weak = SimulationResult::from_trials("Weak", vec![-5.0, 10.0], vec![0.0; 2], vec![6; 2]).unwrap();
/// let strong = SimulationResult::from_trials("Strong", vec![20.0, 40.0], vec![0.0; 2], vec![3; 2]).unwrap();
///
/// let ranking = compare_scenarios(&[weak, strong]).unwrap();
/// assert_eq!(ranking[0].scenario_name, "Strong");
/// assert_eq!(ranking[0].rank, 1);
/// assert_eq!(ranking[0].score, 1.0);
/// ```
pub fn compare_scenarios(results: &[SimulationResult]) -> Result<Vec<RankedScenario>, DomainError> {
    compare_scenarios_with(&ParallelConfig::default(), results)
}

/// [`compare_scenarios`] with an explicit parallel configuration.
pub fn compare_scenarios_with(
    config: &ParallelConfig,
    results: &[SimulationResult],
) -> Result<Vec<RankedScenario>, DomainError> {
    let metrics = try_parallel_map(config, results, compute_risk_metrics)?;
    let scale = npv_scale(&metrics);

    let mut ranking: Vec<RankedScenario> = results
        .iter()
        .zip(metrics)
        .map(|(result, metrics)| {
            let npv_term = if scale == 0.0 {
                0.0
            } else {
                metrics.mean_npv / scale
            };
            RankedScenario {
                rank: 0,
                scenario_name: result.scenario_name().to_string(),
                score: NPV_WEIGHT * npv_term + SUCCESS_WEIGHT * metrics.success_probability / 100.0,
                metrics,
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (i, row) in ranking.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    Ok(ranking)
}

/// Positive normaliser of the mean NPVs, or 0 when every mean is 0.
fn npv_scale(metrics: &[RiskMetrics]) -> f64 {
    let max = metrics
        .iter()
        .map(|m| m.mean_npv)
        .fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max != 0.0 {
        return max.abs();
    }
    metrics
        .iter()
        .map(|m| m.mean_npv.abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result(name: &str, npv: &[f64]) -> SimulationResult {
        let n = npv.len();
        SimulationResult::from_trials(name, npv.to_vec(), vec![0.0; n], vec![1; n]).unwrap()
    }

    #[test]
    fn test_scores_positive_max() {
        let ranking = compare_scenarios(&[
            result("A", &[50.0, 150.0]),
            result("B", &[200.0, 200.0]),
        ])
        .unwrap();

        assert_eq!(ranking[0].scenario_name, "B");
        assert_relative_eq!(ranking[0].score, 1.0);
        // 0.6 * 100 / 200 + 0.4 * 1.0
        assert_relative_eq!(ranking[1].score, 0.7);
        assert_eq!(ranking[1].rank, 2);
    }

    #[test]
    fn test_negative_max_keeps_order() {
        let ranking = compare_scenarios(&[
            result("Worse", &[-400.0, -200.0]),
            result("Better", &[-100.0, -100.0]),
        ])
        .unwrap();

        assert_eq!(ranking[0].scenario_name, "Better");
        assert_relative_eq!(ranking[0].score, -0.6);
        assert_relative_eq!(ranking[1].score, -1.8);
    }

    #[test]
    fn test_zero_max_uses_largest_magnitude() {
        let ranking = compare_scenarios(&[
            result("Neg", &[-50.0, -50.0]),
            result("Zero", &[-10.0, 10.0]),
        ])
        .unwrap();
        assert_eq!(ranking[0].scenario_name, "Zero");
        assert_relative_eq!(ranking[0].score, 0.2);
        assert_relative_eq!(ranking[1].score, -0.6);
    }

    #[test]
    fn test_all_zero_means() {
        let ranking = compare_scenarios(&[result("X", &[0.0]), result("Y", &[-1.0, 1.0])]).unwrap();
        assert_eq!(ranking[0].scenario_name, "Y");
        assert_relative_eq!(ranking[0].score, 0.2);
        assert_eq!(ranking[1].score, 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranking = compare_scenarios(&[
            result("First", &[10.0]),
            result("Second", &[10.0]),
            result("Third", &[10.0]),
        ])
        .unwrap();
        let names: Vec<&str> = ranking.iter().map(|r| r.scenario_name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(compare_scenarios(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_degenerate_result_rejected() {
        let empty = SimulationResult::from_outcomes("Empty", &[]);
        assert_eq!(
            compare_scenarios(&[result("Ok", &[1.0]), empty]),
            Err(DomainError::EmptySample)
        );
    }
}
