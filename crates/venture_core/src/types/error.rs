//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: malformed scenario construction parameters
//! - `DomainError`: statistics requested over a degenerate simulation result

use thiserror::Error;

/// Scenario validation errors.
///
/// Raised synchronously by [`ScenarioBuilder::build`](super::ScenarioBuilder::build)
/// and [`Scenario::with_parameter`](super::Scenario::with_parameter). A scenario
/// that fails validation is never constructed.
///
/// # Examples
/// ```
/// use venture_core::types::ValidationError;
///
/// let err = ValidationError::NonPositiveInvestment { value: 0.0 };
/// assert_eq!(err.field(), "initial_investment");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid initial_investment: 0 (must be greater than zero)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required builder field was never set.
    #[error("Missing {field}: must be specified")]
    MissingField {
        /// Field that was not provided
        field: &'static str,
    },

    /// Scenario name is empty or whitespace only.
    #[error("Invalid name: must not be empty")]
    EmptyName,

    /// Initial investment is zero or negative.
    #[error("Invalid initial_investment: {value} (must be greater than zero)")]
    NonPositiveInvestment {
        /// Rejected value
        value: f64,
    },

    /// A standard deviation field is negative.
    #[error("Invalid {field}: {value} (standard deviation must be non-negative)")]
    NegativeStdDev {
        /// Offending field (`revenue_std` or `cost_std`)
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Market volatility is negative.
    #[error("Invalid market_volatility: {value} (must be non-negative)")]
    NegativeVolatility {
        /// Rejected value
        value: f64,
    },

    /// Time horizon is zero or negative.
    #[error("Invalid time_horizon: {value} (must be a positive number of periods)")]
    NonPositiveHorizon {
        /// Rejected value
        value: i64,
    },

    /// Time horizon does not fit in `u32` periods.
    #[error("Invalid time_horizon: {value} (must be at most {max} periods)", max = u32::MAX)]
    HorizonTooLong {
        /// Rejected value
        value: i64,
    },

    /// A numeric field is NaN or infinite.
    #[error("Invalid {field}: must be finite")]
    NonFinite {
        /// Offending field
        field: &'static str,
    },
}

impl ValidationError {
    /// Returns the name of the scenario field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::EmptyName => "name",
            ValidationError::NonPositiveInvestment { .. } => "initial_investment",
            ValidationError::NegativeStdDev { field, .. } => field,
            ValidationError::NegativeVolatility { .. } => "market_volatility",
            ValidationError::NonPositiveHorizon { .. } | ValidationError::HorizonTooLong { .. } => {
                "time_horizon"
            }
            ValidationError::NonFinite { field } => field,
        }
    }
}

/// Errors for statistics over degenerate simulation output.
///
/// Unreachable for results produced by the engine, but checked explicitly
/// for hand-built or deserialised results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The result holds zero trials.
    #[error("Empty sample: statistics require at least one trial")]
    EmptySample,

    /// The per-trial sequences are not index-aligned.
    #[error("Misaligned trials: npv={npv}, roi={roi}, break_even={break_even}")]
    MisalignedTrials {
        /// Length of the NPV sequence
        npv: usize,
        /// Length of the ROI sequence
        roi: usize,
        /// Length of the break-even sequence
        break_even: usize,
    },
}
