//! Monte Carlo cash-flow simulation.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── EngineConfig    (trial count, base seed, parallel threshold)
//! ├── CashFlowModel   (per-scenario growth and discount curves)
//! ├── TrialWorkspace  (per-worker draw buffers)
//! └── VentureRng      (one seeded generator per trial)
//! ```
//!
//! Trials are independent; above the parallel threshold they are spread over
//! the rayon pool with one [`TrialWorkspace`] per worker.
//!
//! ```rust
//! use venture_core::types::Scenario;
//! use venture_engine::mc::{EngineConfig, MonteCarloEngine};
//!
//! let config = EngineConfig::builder()
//!     .n_simulations(1_000)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let engine = MonteCarloEngine::new(config).unwrap();
//!
//! let scenario = Scenario::builder()
//!     .name("Pilot")
//!     .initial_investment(50_000.0)
//!     .revenue(12_000.0, 2_000.0)
//!     .cost(6_000.0, 1_000.0)
//!     .build()
//!     .unwrap();
//!
//! let result = engine.simulate(&scenario);
//! assert!((0.0..=100.0).contains(&result.success_probability()));
//! ```

mod cashflow;
mod config;
mod engine;
mod error;
mod workspace;

pub use cashflow::{
    discount_factors, growth_trend, CashFlowModel, ANNUAL_DISCOUNT_RATE, INFLATION_NOISE_STD,
    MONTHLY_GROWTH_RATE, PERIODS_PER_YEAR,
};
pub use config::{
    EngineConfig, EngineConfigBuilder, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SEED,
    DEFAULT_SIMULATIONS, MAX_SIMULATIONS,
};
pub use engine::MonteCarloEngine;
pub use error::ConfigError;
pub use workspace::TrialWorkspace;
