//! Descriptive statistics over simulation samples.
//!
//! All functions take plain `&[f64]` slices. Callers are expected to reject
//! empty samples up front (see [`DomainError::EmptySample`](crate::types::DomainError));
//! the functions here return `0.0` rather than NaN for degenerate input.
//!
//! Conventions:
//! - [`std_dev`] is the population estimator (divides by `n`)
//! - [`skewness`] is the adjusted Fisher-Pearson estimator (G1)
//! - [`excess_kurtosis`] is the bias-corrected excess estimator (G2)
//! - [`percentile_sorted`] interpolates linearly at rank `(n - 1) * p / 100`

/// Arithmetic mean. Returns `0.0` for an empty slice.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (divides by `n`).
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation.
#[inline]
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Central moments `(m2, m3, m4)` about the mean, each divided by `n`.
fn central_moments(data: &[f64]) -> (f64, f64, f64) {
    let n = data.len() as f64;
    let m = mean(data);
    let (s2, s3, s4) = data.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - m;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    });
    (s2 / n, s3 / n, s4 / n)
}

/// Sample skewness (adjusted Fisher-Pearson, G1).
///
/// Returns `0.0` for fewer than three observations or zero variance.
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 3 {
        return 0.0;
    }
    let (m2, m3, _) = central_moments(data);
    if m2 <= 0.0 {
        return 0.0;
    }
    let n = n as f64;
    let g1 = m3 / m2.powf(1.5);
    g1 * (n * (n - 1.0)).sqrt() / (n - 2.0)
}

/// Sample excess kurtosis (bias-corrected, G2).
///
/// Returns `0.0` for fewer than four observations or zero variance.
pub fn excess_kurtosis(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 4 {
        return 0.0;
    }
    let (m2, _, m4) = central_moments(data);
    if m2 <= 0.0 {
        return 0.0;
    }
    let n = n as f64;
    let g2 = m4 / (m2 * m2) - 3.0;
    ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
}

/// Returns an ascending copy of the sample (NaN-safe total order).
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut values = data.to_vec();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// Percentile of an ascending sample with linear interpolation.
///
/// `p` is expressed in percent and clamped to `[0, 100]`.
///
/// # Examples
///
/// ```
/// use venture_core::math::stats::percentile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_sorted(&sorted, 50.0), 3.0);
/// assert_eq!(percentile_sorted(&sorted, 5.0), 1.2);
/// ```
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => return 0.0,
        1 => return sorted[0],
        _ => {}
    }
    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = rank - lo as f64;
        (sorted[lo] + (sorted[hi] - sorted[lo]) * w)
            .max(sorted[lo])
            .min(sorted[hi])
    }
}

/// Percentile of an unsorted sample.
#[inline]
pub fn percentile(data: &[f64], p: f64) -> f64 {
    percentile_sorted(&sorted(data), p)
}

/// Share of observations satisfying `predicate`, in percent.
pub fn percent_where<T, F>(data: &[T], predicate: F) -> f64
where
    F: Fn(&T) -> bool,
{
    if data.is_empty() {
        return 0.0;
    }
    let hits = data.iter().filter(|x| predicate(x)).count();
    hits as f64 / data.len() as f64 * 100.0
}

/// Minimum and maximum in one pass. `(0.0, 0.0)` for an empty slice.
pub fn min_max(data: &[f64]) -> (f64, f64) {
    if data.is_empty() {
        return (0.0, 0.0);
    }
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}
