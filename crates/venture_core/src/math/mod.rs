//! Numerical helpers shared by the engine and analytics layers.
//!
//! - [`stats`]: descriptive statistics (moments, percentiles, frequencies)

pub mod stats;
