//! Risk metrics of a single simulation result.

use std::fmt;
use std::str::FromStr;

use venture_core::math::stats;
use venture_core::types::{DomainError, SimulationResult};

/// Risk metrics derived from one [`SimulationResult`].
///
/// A fixed-shape record: every field is always present. Use
/// [`RiskMetrics::get`] or [`RiskMetrics::entries`] for name-keyed access.
///
/// # Invariants
///
/// - `cvar_95 <= var_95`
/// - `coefficient_of_variation == std_npv / |mean_npv|`, or `+inf` when
///   `mean_npv == 0`
/// - `loss_probability == 100 - success_probability`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskMetrics {
    /// Mean NPV
    pub mean_npv: f64,
    /// Population standard deviation of NPV
    pub std_npv: f64,
    /// `std_npv / |mean_npv|`
    ///
    /// Serialised as the string `"inf"` when `mean_npv == 0`.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub coefficient_of_variation: f64,
    /// Percentage of trials with positive NPV
    pub success_probability: f64,
    /// 5th percentile of NPV
    pub var_95: f64,
    /// Mean NPV of the trials at or below `var_95`
    pub cvar_95: f64,
    /// Sample skewness of NPV
    pub skewness: f64,
    /// Sample excess kurtosis of NPV
    pub kurtosis: f64,
    /// 10th percentile of NPV
    pub percentile_10: f64,
    /// 25th percentile of NPV
    pub percentile_25: f64,
    /// Median NPV
    pub median: f64,
    /// 75th percentile of NPV
    pub percentile_75: f64,
    /// 90th percentile of NPV
    pub percentile_90: f64,
    /// Mean ROI in percent
    pub roi_mean: f64,
    /// Population standard deviation of ROI
    pub roi_std: f64,
    /// Smallest ROI
    pub roi_min: f64,
    /// Largest ROI
    pub roi_max: f64,
    /// Percentage of trials with positive ROI
    pub prob_roi_positive: f64,
    /// Mean break-even period
    pub break_even_mean: f64,
    /// Median break-even period
    pub break_even_median: f64,
    /// Percentage of trials breaking even within 6 periods
    pub prob_break_even_within_6: f64,
    /// Percentage of trials breaking even within 12 periods
    pub prob_break_even_within_12: f64,
    /// `mean_npv / std_npv`, 0 when `std_npv == 0`
    pub sharpe_ratio: f64,
    /// `100 - success_probability`
    pub loss_probability: f64,
}

/// Names every [`RiskMetrics`] field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[allow(missing_docs)]
pub enum MetricKind {
    MeanNpv,
    StdNpv,
    CoefficientOfVariation,
    SuccessProbability,
    Var95,
    Cvar95,
    Skewness,
    Kurtosis,
    Percentile10,
    Percentile25,
    Median,
    Percentile75,
    Percentile90,
    RoiMean,
    RoiStd,
    RoiMin,
    RoiMax,
    ProbRoiPositive,
    BreakEvenMean,
    BreakEvenMedian,
    ProbBreakEvenWithin6,
    ProbBreakEvenWithin12,
    SharpeRatio,
    LossProbability,
}

impl MetricKind {
    /// Every metric, in field order.
    pub const ALL: [MetricKind; 24] = [
        MetricKind::MeanNpv,
        MetricKind::StdNpv,
        MetricKind::CoefficientOfVariation,
        MetricKind::SuccessProbability,
        MetricKind::Var95,
        MetricKind::Cvar95,
        MetricKind::Skewness,
        MetricKind::Kurtosis,
        MetricKind::Percentile10,
        MetricKind::Percentile25,
        MetricKind::Median,
        MetricKind::Percentile75,
        MetricKind::Percentile90,
        MetricKind::RoiMean,
        MetricKind::RoiStd,
        MetricKind::RoiMin,
        MetricKind::RoiMax,
        MetricKind::ProbRoiPositive,
        MetricKind::BreakEvenMean,
        MetricKind::BreakEvenMedian,
        MetricKind::ProbBreakEvenWithin6,
        MetricKind::ProbBreakEvenWithin12,
        MetricKind::SharpeRatio,
        MetricKind::LossProbability,
    ];

    /// Returns the snake_case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::MeanNpv => "mean_npv",
            MetricKind::StdNpv => "std_npv",
            MetricKind::CoefficientOfVariation => "coefficient_of_variation",
            MetricKind::SuccessProbability => "success_probability",
            MetricKind::Var95 => "var_95",
            MetricKind::Cvar95 => "cvar_95",
            MetricKind::Skewness => "skewness",
            MetricKind::Kurtosis => "kurtosis",
            MetricKind::Percentile10 => "percentile_10",
            MetricKind::Percentile25 => "percentile_25",
            MetricKind::Median => "median",
            MetricKind::Percentile75 => "percentile_75",
            MetricKind::Percentile90 => "percentile_90",
            MetricKind::RoiMean => "roi_mean",
            MetricKind::RoiStd => "roi_std",
            MetricKind::RoiMin => "roi_min",
            MetricKind::RoiMax => "roi_max",
            MetricKind::ProbRoiPositive => "prob_roi_positive",
            MetricKind::BreakEvenMean => "break_even_mean",
            MetricKind::BreakEvenMedian => "break_even_median",
            MetricKind::ProbBreakEvenWithin6 => "prob_break_even_within_6",
            MetricKind::ProbBreakEvenWithin12 => "prob_break_even_within_12",
            MetricKind::SharpeRatio => "sharpe_ratio",
            MetricKind::LossProbability => "loss_probability",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown metric: {name}")]
pub struct UnknownMetric {
    /// Name that failed to parse
    pub name: String,
}

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        MetricKind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalised)
            .ok_or_else(|| UnknownMetric {
                name: s.to_string(),
            })
    }
}

impl RiskMetrics {
    /// Value of one metric.
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::MeanNpv => self.mean_npv,
            MetricKind::StdNpv => self.std_npv,
            MetricKind::CoefficientOfVariation => self.coefficient_of_variation,
            MetricKind::SuccessProbability => self.success_probability,
            MetricKind::Var95 => self.var_95,
            MetricKind::Cvar95 => self.cvar_95,
            MetricKind::Skewness => self.skewness,
            MetricKind::Kurtosis => self.kurtosis,
            MetricKind::Percentile10 => self.percentile_10,
            MetricKind::Percentile25 => self.percentile_25,
            MetricKind::Median => self.median,
            MetricKind::Percentile75 => self.percentile_75,
            MetricKind::Percentile90 => self.percentile_90,
            MetricKind::RoiMean => self.roi_mean,
            MetricKind::RoiStd => self.roi_std,
            MetricKind::RoiMin => self.roi_min,
            MetricKind::RoiMax => self.roi_max,
            MetricKind::ProbRoiPositive => self.prob_roi_positive,
            MetricKind::BreakEvenMean => self.break_even_mean,
            MetricKind::BreakEvenMedian => self.break_even_median,
            MetricKind::ProbBreakEvenWithin6 => self.prob_break_even_within_6,
            MetricKind::ProbBreakEvenWithin12 => self.prob_break_even_within_12,
            MetricKind::SharpeRatio => self.sharpe_ratio,
            MetricKind::LossProbability => self.loss_probability,
        }
    }

    /// All metrics as `(kind, value)` pairs, in field order.
    pub fn entries(&self) -> [(MetricKind, f64); 24] {
        MetricKind::ALL.map(|kind| (kind, self.get(kind)))
    }
}

/// Computes the risk metrics of one simulation result.
///
/// Pure: the same result always yields the same metrics.
///
/// # Errors
///
/// - `DomainError::EmptySample` if the result has no trials
/// - `DomainError::MisalignedTrials` if its per-trial sequences differ in
///   length (only possible for hand-built or deserialised results)
///
/// # Examples
///
/// ```
/// use venture_core::types::SimulationResult;
/// use venture_risk::metrics::compute_risk_metrics;
///
/// let result = SimulationResult::from_trials(
///     "Demo",
///     vec![-20.0, 10.0, 30.0, 60.0],
///     vec![-2.0, 1.0, 3.0, 6.0],
///     vec![12, 9, 6, 4],
/// )
/// .unwrap();
///
/// let metrics = compute_risk_metrics(&result).unwrap();
/// assert_eq!(metrics.mean_npv, 20.0);
/// assert!(metrics.cvar_95 <= metrics.var_95);
/// assert_eq!(metrics.loss_probability, 25.0);
/// ```
pub fn compute_risk_metrics(result: &SimulationResult) -> Result<RiskMetrics, DomainError> {
    result.ensure_non_degenerate()?;

    let npv = result.npv_values();
    let roi = result.roi_values();
    let break_even: Vec<f64> = result
        .break_even_periods()
        .iter()
        .map(|&p| f64::from(p))
        .collect();

    let sorted_npv = stats::sorted(npv);
    let mean_npv = result.mean_npv();
    let std_npv = result.std_npv();
    let var_95 = result.var_95();

    let coefficient_of_variation = if mean_npv == 0.0 {
        f64::INFINITY
    } else {
        std_npv / mean_npv.abs()
    };

    // Non-empty: var_95 is clamped to the sample range
    let tail: Vec<f64> = sorted_npv
        .iter()
        .copied()
        .take_while(|&v| v <= var_95)
        .collect();
    let cvar_95 = if tail.is_empty() {
        var_95
    } else {
        stats::mean(&tail)
    };

    let (roi_min, roi_max) = stats::min_max(roi);
    let sharpe_ratio = if std_npv == 0.0 {
        0.0
    } else {
        mean_npv / std_npv
    };

    Ok(RiskMetrics {
        mean_npv,
        std_npv,
        coefficient_of_variation,
        success_probability: result.success_probability(),
        var_95,
        cvar_95,
        skewness: stats::skewness(npv),
        kurtosis: stats::excess_kurtosis(npv),
        percentile_10: stats::percentile_sorted(&sorted_npv, 10.0),
        percentile_25: stats::percentile_sorted(&sorted_npv, 25.0),
        median: stats::percentile_sorted(&sorted_npv, 50.0),
        percentile_75: stats::percentile_sorted(&sorted_npv, 75.0),
        percentile_90: stats::percentile_sorted(&sorted_npv, 90.0),
        roi_mean: stats::mean(roi),
        roi_std: stats::std_dev(roi),
        roi_min,
        roi_max,
        prob_roi_positive: stats::percent_where(roi, |&r| r > 0.0),
        break_even_mean: stats::mean(&break_even),
        break_even_median: stats::percentile(&break_even, 50.0),
        prob_break_even_within_6: stats::percent_where(&break_even, |&p| p <= 6.0),
        prob_break_even_within_12: stats::percent_where(&break_even, |&p| p <= 12.0),
        sharpe_ratio,
        loss_probability: 100.0 - result.success_probability(),
    })
}

/// Serde adapter for `f64` fields that may be infinite.
///
/// Finite values are plain numbers. Non-finite values are written as
/// `"inf"`, `"-inf"` or `"nan"`, which self-describing formats such as JSON
/// would otherwise collapse to `null`.
#[cfg(feature = "serde")]
mod non_finite {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
                "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(de::Error::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"nan\"",
                )),
            },
        }
    }
}
