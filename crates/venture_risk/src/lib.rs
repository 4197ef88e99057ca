//! # venture_risk: Scenario Analytics (Layer 3)
//!
//! Pure statistics over simulation results produced by `venture_engine`.
//!
//! This crate provides:
//! - Risk metrics of one result (mean/std, VaR/CVaR, moments, percentiles,
//!   ROI and break-even summaries)
//! - Composite-score ranking of several scenarios
//! - One-at-a-time parameter sensitivity sweeps with cancellation
//! - NPV histograms for rendering collaborators
//! - Rayon helpers for scenario-level parallelism
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           venture_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  metrics/   - RiskMetrics, histogram    │
//! │  scenarios/ - comparison, sensitivity   │
//! │  parallel/  - Rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          venture_engine (L2)            │
//! │  Monte Carlo cash-flow engine           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use venture_core::types::Scenario;
//! use venture_engine::mc::MonteCarloEngine;
//! use venture_risk::metrics::compute_risk_metrics;
//! use venture_risk::scenarios::compare_scenarios;
//!
//! let conservative = Scenario::builder()
//!     .name("Conservative")
//!     .initial_investment(80_000.0)
//!     .revenue(20_000.0, 3_000.0)
//!     .cost(12_000.0, 2_000.0)
//!     .market_volatility(0.10)
//!     .build()
//!     .unwrap();
//! let aggressive = Scenario::builder()
//!     .name("Aggressive")
//!     .initial_investment(150_000.0)
//!     .revenue(40_000.0, 10_000.0)
//!     .cost(20_000.0, 5_000.0)
//!     .market_volatility(0.25)
//!     .build()
//!     .unwrap();
//!
//! let engine = MonteCarloEngine::with_simulations(1_000).unwrap();
//! let results = vec![engine.simulate(&conservative), engine.simulate(&aggressive)];
//!
//! let metrics = compute_risk_metrics(&results[0]).unwrap();
//! assert!(metrics.cvar_95 <= metrics.var_95);
//!
//! let ranking = compare_scenarios(&results).unwrap();
//! assert_eq!(ranking.len(), 2);
//! assert_eq!(ranking[0].rank, 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for metrics, rankings and sensitivity output

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod metrics;
pub mod parallel;
pub mod scenarios;
