//! Core domain types.
//!
//! This module provides:
//! - [`Scenario`], [`ScenarioBuilder`], [`ScenarioSpec`]: validated business scenarios
//! - [`ScenarioParameter`]: the sweepable scenario fields
//! - [`SimulationResult`], [`TrialOutcome`]: per-trial samples plus aggregates
//! - [`ValidationError`], [`DomainError`]: structured errors

pub mod error;
pub mod result;
pub mod scenario;

pub use error::{DomainError, ValidationError};
pub use result::{SimulationResult, TrialOutcome};
pub use scenario::{
    Scenario, ScenarioBuilder, ScenarioParameter, ScenarioSpec, UnknownParameter,
    DEFAULT_INFLATION_RATE, DEFAULT_MARKET_VOLATILITY, DEFAULT_TIME_HORIZON,
};
