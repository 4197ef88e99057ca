//! # venture_engine: Monte Carlo Engine (Layer 2)
//!
//! ## Layer 2 Role
//!
//! venture_engine turns a validated [`Scenario`](venture_core::types::Scenario)
//! into a [`SimulationResult`](venture_core::types::SimulationResult):
//! - Engine configuration and validation (`mc::EngineConfig`)
//! - Seeded per-trial random substreams (`rng`)
//! - The per-period cash-flow kernel (`mc::CashFlowModel`)
//! - Sequential or rayon-parallel trial execution (`mc::MonteCarloEngine`)
//!
//! The engine performs no I/O and never installs a tracing subscriber; it
//! only emits a `debug` span per `simulate` call.
//!
//! ## Usage Example
//!
//! ```rust
//! use venture_core::types::Scenario;
//! use venture_engine::mc::MonteCarloEngine;
//!
//! let scenario = Scenario::builder()
//!     .name("Reference")
//!     .initial_investment(100_000.0)
//!     .revenue(25_000.0, 5_000.0)
//!     .cost(15_000.0, 3_000.0)
//!     .inflation_rate(0.03)
//!     .market_volatility(0.15)
//!     .time_horizon(12)
//!     .build()
//!     .unwrap();
//!
//! let engine = MonteCarloEngine::with_simulations(5_000).unwrap();
//! let result = engine.simulate(&scenario);
//!
//! assert!(result.mean_npv() > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Forwarded to `venture_core/serde`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;
