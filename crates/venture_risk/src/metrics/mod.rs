//! Risk metrics over simulation results.
//!
//! - [`compute_risk_metrics`]: the fixed [`RiskMetrics`] record of one result
//! - [`MetricKind`]: name-keyed access to every metric
//! - [`npv_histogram`]: equal-width NPV distribution for rendering

mod histogram;
mod risk;

pub use histogram::{npv_histogram, Histogram};
pub use risk::{compute_risk_metrics, MetricKind, RiskMetrics, UnknownMetric};
