//! Error types for sensitivity sweeps.

use thiserror::Error;
use venture_core::types::{ScenarioParameter, ValidationError};

/// Sensitivity analysis errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensitivityError {
    /// A parameter range cannot be swept.
    #[error("Invalid range for '{parameter}': {reason}")]
    InvalidRange {
        /// Swept parameter
        parameter: ScenarioParameter,
        /// Why the range was rejected
        reason: String,
    },

    /// Overriding the base scenario produced an invalid scenario.
    #[error("Invalid scenario override: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SensitivityError::InvalidRange {
            parameter: ScenarioParameter::CostMean,
            reason: "steps must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid range for 'cost_mean': steps must be at least 1"
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err: SensitivityError = ValidationError::NonPositiveHorizon { value: 0 }.into();
        assert!(matches!(err, SensitivityError::Validation(_)));
        assert!(err.to_string().contains("time_horizon"));
    }
}
