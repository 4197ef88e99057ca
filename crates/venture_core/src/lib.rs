//! # venture_core: Scenario Model for Business Monte Carlo Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! venture_core is the bottom layer of the workspace, providing:
//! - The immutable, validated business [`Scenario`](types::Scenario) (`types::scenario`)
//! - The [`SimulationResult`](types::SimulationResult) produced by the engine (`types::result`)
//! - Error types: `ValidationError`, `DomainError` (`types::error`)
//! - Descriptive statistics shared by the upper layers (`math::stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other venture_* crates and performs no I/O.
//! External dependencies are limited to:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use venture_core::types::{Scenario, ScenarioParameter, ValidationError};
//!
//! let scenario = Scenario::builder()
//!     .name("Moderate strategy")
//!     .initial_investment(100_000.0)
//!     .revenue(28_000.0, 5_000.0)
//!     .cost(16_000.0, 2_500.0)
//!     .inflation_rate(0.03)
//!     .market_volatility(0.15)
//!     .time_horizon(12)
//!     .build()
//!     .unwrap();
//!
//! // Modified scenarios are new values
//! let longer = scenario.with_parameter(ScenarioParameter::TimeHorizon, 24.0).unwrap();
//! assert_eq!(longer.time_horizon(), 24);
//! assert_eq!(scenario.time_horizon(), 12);
//!
//! // Validation names the offending field
//! let err = scenario.with_parameter(ScenarioParameter::CostStd, -1.0).unwrap_err();
//! assert!(matches!(err, ValidationError::NegativeStdDev { field: "cost_std", .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Scenario`, `ScenarioSpec`,
//!   `ScenarioParameter` and `SimulationResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
