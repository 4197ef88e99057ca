//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for Monte Carlo
//! trials.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; identical engines give
//!   identical results
//! - **Partitioning**: Each trial owns a generator derived from
//!   `(base_seed, stream_id, trial_index)`, so no generator is ever shared
//!   between threads
//! - **Efficiency**: Batch fills into pre-allocated `&mut [f64]` buffers
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded pseudo-random number generator wrapper
//! - [`seed`]: SplitMix64-based substream seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use venture_engine::rng::{stream_seed, trial_seed, VentureRng};
//!
//! let stream = stream_seed(42, 0);
//! let mut rng = VentureRng::from_seed(trial_seed(stream, 17));
//!
//! let mut revenue = vec![0.0; 12];
//! rng.fill_normal(&mut revenue, 25_000.0, 5_000.0);
//! ```

mod prng;
mod seed;

// Public re-exports
pub use prng::VentureRng;
pub use seed::{splitmix64, stream_seed, trial_seed};
