//! Pre-allocated workspace buffers for trial simulation.
//!
//! This module provides [`TrialWorkspace`], which holds the per-period draw
//! buffers of one trial. A workspace is created once per worker (see
//! `rayon`'s `map_init`) and reused for every trial that worker runs, so the
//! trial loop itself performs no heap allocation.
//!
//! # Memory Layout
//!
//! Four contiguous buffers of `n_periods` each:
//! - `revenue`: base revenue draws
//! - `shocks`: multiplicative market shocks
//! - `costs`: cost draws
//! - `inflation`: per-period inflation noise

/// Pre-allocated workspace for one trial.
///
/// # Examples
///
/// ```rust
/// use venture_engine::mc::TrialWorkspace;
///
/// let mut workspace = TrialWorkspace::new(12);
/// workspace.ensure_capacity(24);
/// assert_eq!(workspace.n_periods(), 24);
/// assert_eq!(workspace.revenue_mut().len(), 24);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrialWorkspace {
    revenue: Vec<f64>,
    shocks: Vec<f64>,
    costs: Vec<f64>,
    inflation: Vec<f64>,
    /// Logical number of periods.
    n_periods: usize,
}

impl TrialWorkspace {
    /// Creates a workspace sized for `n_periods`.
    pub fn new(n_periods: usize) -> Self {
        Self {
            revenue: vec![0.0; n_periods],
            shocks: vec![0.0; n_periods],
            costs: vec![0.0; n_periods],
            inflation: vec![0.0; n_periods],
            n_periods,
        }
    }

    /// Ensures the buffers hold at least `n_periods` values.
    ///
    /// Never shrinks, so reuse across horizons does not reallocate.
    pub fn ensure_capacity(&mut self, n_periods: usize) {
        if n_periods > self.revenue.len() {
            self.revenue.resize(n_periods, 0.0);
            self.shocks.resize(n_periods, 0.0);
            self.costs.resize(n_periods, 0.0);
            self.inflation.resize(n_periods, 0.0);
        }
        self.n_periods = n_periods;
    }

    /// Returns the logical number of periods.
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    /// Returns the allocated capacity in periods.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.revenue.len()
    }

    /// Mutable base revenue buffer.
    #[inline]
    pub fn revenue_mut(&mut self) -> &mut [f64] {
        &mut self.revenue[..self.n_periods]
    }

    /// Mutable market shock buffer.
    #[inline]
    pub fn shocks_mut(&mut self) -> &mut [f64] {
        &mut self.shocks[..self.n_periods]
    }

    /// Mutable cost buffer.
    #[inline]
    pub fn costs_mut(&mut self) -> &mut [f64] {
        &mut self.costs[..self.n_periods]
    }

    /// Mutable inflation noise buffer.
    #[inline]
    pub fn inflation_mut(&mut self) -> &mut [f64] {
        &mut self.inflation[..self.n_periods]
    }

    /// All four buffers at once, as `(revenue, shocks, costs, inflation)`.
    #[inline]
    pub fn series(&self) -> (&[f64], &[f64], &[f64], &[f64]) {
        let n = self.n_periods;
        (
            &self.revenue[..n],
            &self.shocks[..n],
            &self.costs[..n],
            &self.inflation[..n],
        )
    }
}
