//! Equal-width NPV histogram for rendering collaborators.

use venture_core::math::stats;
use venture_core::types::{DomainError, SimulationResult};

/// Histogram of a sample with equal-width bins.
///
/// `edges` has `counts.len() + 1` entries; bin `i` covers
/// `[edges[i], edges[i + 1])`, the last bin also includes its upper edge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Bin edges, ascending
    pub edges: Vec<f64>,
    /// Observations per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Builds an NPV histogram with `bins` equal-width bins.
///
/// A constant sample gets a single unit-width range centred on its value.
/// `bins == 0` is treated as one bin.
///
/// # Errors
///
/// Returns `DomainError` for a result without trials.
pub fn npv_histogram(result: &SimulationResult, bins: usize) -> Result<Histogram, DomainError> {
    result.ensure_non_degenerate()?;
    Ok(histogram(result.npv_values(), bins.max(1)))
}

fn histogram(data: &[f64], bins: usize) -> Histogram {
    let (mut lo, mut hi) = stats::min_max(data);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
    edges.push(hi);

    let mut counts = vec![0usize; bins];
    for &value in data {
        let index = (((value - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    Histogram { edges, counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(npv: Vec<f64>) -> SimulationResult {
        let n = npv.len();
        SimulationResult::from_trials("Histogram", npv, vec![0.0; n], vec![1; n]).unwrap()
    }

    #[test]
    fn test_histogram_counts() {
        let h = npv_histogram(&result(vec![0.0, 1.0, 2.0, 3.0, 4.0, 10.0]), 5).unwrap();
        assert_eq!(h.n_bins(), 5);
        assert_eq!(h.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(h.counts, vec![2, 2, 1, 0, 1]);
        assert_eq!(h.total(), 6);
    }

    #[test]
    fn test_histogram_constant_sample() {
        let h = npv_histogram(&result(vec![7.0; 4]), 3).unwrap();
        assert_eq!(h.edges.first(), Some(&6.5));
        assert_eq!(h.edges.last(), Some(&7.5));
        assert_eq!(h.total(), 4);
        assert_eq!(h.counts, vec![0, 4, 0]);
    }

    #[test]
    fn test_histogram_zero_bins() {
        let h = npv_histogram(&result(vec![1.0, 2.0]), 0).unwrap();
        assert_eq!(h.counts, vec![2]);
    }

    #[test]
    fn test_histogram_empty_result() {
        let empty = SimulationResult::from_outcomes("Empty", &[]);
        assert_eq!(npv_histogram(&empty, 10), Err(DomainError::EmptySample));
    }
}
