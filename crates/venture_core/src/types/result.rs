//! Simulation output.

use super::error::DomainError;
use crate::math::stats;

/// Outcome of a single trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialOutcome {
    /// Discounted cash flows minus the initial investment
    pub npv: f64,
    /// Undiscounted cash flows as a percentage of the initial investment
    pub roi: f64,
    /// First 1-based period with positive cumulative cash, or the horizon
    pub break_even_period: u32,
}

/// Outcome of one `simulate` call.
///
/// Holds the three index-aligned per-trial sequences together with the
/// top-level aggregates derived from the NPV sample. Immutable once built.
///
/// # Invariants
///
/// - `npv_values`, `roi_values` and `break_even_periods` have equal length
///   and entry `i` of each belongs to trial `i`
/// - `0 <= success_probability <= 100`
/// - `percentile_5 <= percentile_95`
/// - `var_95 == percentile_5`
///
/// Values obtained from [`SimulationResult::from_trials`] always satisfy
/// these; deserialised values are re-checked by the analytics layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    scenario_name: String,
    npv_values: Vec<f64>,
    roi_values: Vec<f64>,
    break_even_periods: Vec<u32>,
    success_probability: f64,
    mean_npv: f64,
    std_npv: f64,
    percentile_5: f64,
    percentile_95: f64,
    var_95: f64,
}

impl SimulationResult {
    /// Builds a result from per-trial samples and computes the aggregates.
    ///
    /// # Errors
    ///
    /// - `DomainError::EmptySample` if there are no trials
    /// - `DomainError::MisalignedTrials` if the sequences differ in length
    ///
    /// # Examples
    ///
    /// ```
    /// use venture_core::types::SimulationResult;
    ///
    /// let result = SimulationResult::from_trials(
    ///     "Demo",
    ///     vec![-10.0, 5.0, 20.0, 35.0],
    ///     vec![-5.0, 2.0, 9.0, 14.0],
    ///     vec![12, 8, 5, 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(result.n_trials(), 4);
    /// assert_eq!(result.success_probability(), 75.0);
    /// assert_eq!(result.var_95(), result.percentile_5());
    /// ```
    pub fn from_trials(
        scenario_name: impl Into<String>,
        npv_values: Vec<f64>,
        roi_values: Vec<f64>,
        break_even_periods: Vec<u32>,
    ) -> Result<Self, DomainError> {
        check_alignment(npv_values.len(), roi_values.len(), break_even_periods.len())?;
        Ok(Self::aggregate(
            scenario_name.into(),
            npv_values,
            roi_values,
            break_even_periods,
        ))
    }

    /// Builds a result from per-trial outcomes, in trial order.
    ///
    /// Alignment holds by construction. An empty outcome list yields zero
    /// aggregates; the analytics layer rejects such a result with
    /// `DomainError::EmptySample`.
    pub fn from_outcomes(scenario_name: impl Into<String>, outcomes: &[TrialOutcome]) -> Self {
        let mut npv_values = Vec::with_capacity(outcomes.len());
        let mut roi_values = Vec::with_capacity(outcomes.len());
        let mut break_even_periods = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            npv_values.push(outcome.npv);
            roi_values.push(outcome.roi);
            break_even_periods.push(outcome.break_even_period);
        }
        Self::aggregate(
            scenario_name.into(),
            npv_values,
            roi_values,
            break_even_periods,
        )
    }

    fn aggregate(
        scenario_name: String,
        npv_values: Vec<f64>,
        roi_values: Vec<f64>,
        break_even_periods: Vec<u32>,
    ) -> Self {
        let sorted = stats::sorted(&npv_values);
        let percentile_5 = stats::percentile_sorted(&sorted, 5.0);

        Self {
            scenario_name,
            success_probability: stats::percent_where(&npv_values, |&npv| npv > 0.0),
            mean_npv: stats::mean(&npv_values),
            std_npv: stats::std_dev(&npv_values),
            percentile_5,
            percentile_95: stats::percentile_sorted(&sorted, 95.0),
            var_95: percentile_5,
            npv_values,
            roi_values,
            break_even_periods,
        }
    }

    /// Checks that the result holds at least one index-aligned trial.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`SimulationResult::from_trials`].
    pub fn ensure_non_degenerate(&self) -> Result<(), DomainError> {
        check_alignment(
            self.npv_values.len(),
            self.roi_values.len(),
            self.break_even_periods.len(),
        )
    }

    /// Name of the simulated scenario.
    #[inline]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.npv_values.len()
    }

    /// Per-trial net present values.
    #[inline]
    pub fn npv_values(&self) -> &[f64] {
        &self.npv_values
    }

    /// Per-trial ROI in percent.
    #[inline]
    pub fn roi_values(&self) -> &[f64] {
        &self.roi_values
    }

    /// Per-trial break-even period (1-based, saturating at the horizon).
    #[inline]
    pub fn break_even_periods(&self) -> &[u32] {
        &self.break_even_periods
    }

    /// Percentage of trials with positive NPV.
    #[inline]
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Mean NPV.
    #[inline]
    pub fn mean_npv(&self) -> f64 {
        self.mean_npv
    }

    /// Standard deviation of NPV.
    #[inline]
    pub fn std_npv(&self) -> f64 {
        self.std_npv
    }

    /// 5th percentile of NPV.
    #[inline]
    pub fn percentile_5(&self) -> f64 {
        self.percentile_5
    }

    /// 95th percentile of NPV.
    #[inline]
    pub fn percentile_95(&self) -> f64 {
        self.percentile_95
    }

    /// Value at risk at 95% (equal to `percentile_5`).
    #[inline]
    pub fn var_95(&self) -> f64 {
        self.var_95
    }
}

fn check_alignment(npv: usize, roi: usize, break_even: usize) -> Result<(), DomainError> {
    if npv != roi || npv != break_even {
        return Err(DomainError::MisalignedTrials {
            npv,
            roi,
            break_even,
        });
    }
    if npv == 0 {
        return Err(DomainError::EmptySample);
    }
    Ok(())
}
