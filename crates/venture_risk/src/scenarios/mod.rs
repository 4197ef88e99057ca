//! Multi-scenario analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │               Scenario analysis                  │
//! ├──────────────────────────────────────────────────┤
//! │  compare_scenarios    - composite-score ranking  │
//! │  ParameterRange       - swept parameter grid     │
//! │  sensitivity_analysis - one-at-a-time sweeps     │
//! │  Cancellable          - stop a sweep between     │
//! │                         scenario evaluations     │
//! └──────────────────────────────────────────────────┘
//! ```

mod cancellation;
mod comparison;
mod error;
mod sensitivity;

pub use cancellation::{Cancellable, CancellationToken};
pub use comparison::{
    compare_scenarios, compare_scenarios_with, RankedScenario, NPV_WEIGHT, SUCCESS_WEIGHT,
};
pub use error::SensitivityError;
pub use sensitivity::{
    sensitivity_analysis, sensitivity_analysis_with_cancel, ParameterRange, ParameterSensitivity,
    SensitivityAnalysis,
};
