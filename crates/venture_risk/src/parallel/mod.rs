//! Rayon-based parallelisation utilities.
//!
//! Scenario-level fan-out for the analytics layer. Trial-level parallelism
//! lives in the engine; these helpers spread independent per-result work
//! (metrics, histograms) over the rayon pool.

use rayon::prelude::*;

/// Default minimum number of items before work is spread over the pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Configuration for parallel execution.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps each item through `mapper`, preserving input order.
///
/// Runs on the rayon pool when `config` says the slice is large enough,
/// sequentially otherwise. The output is identical either way.
pub fn parallel_map<T, R, F>(config: &ParallelConfig, items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items.par_iter().map(mapper).collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Fallible [`parallel_map`]: returns the first error in input order.
pub fn try_parallel_map<T, R, E, F>(
    config: &ParallelConfig,
    items: &[T],
    mapper: F,
) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    parallel_map(config, items, mapper).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<i32> = (0..100).collect();
        let parallel = parallel_map(&ParallelConfig::new(1), &items, |&x| x * 2);
        let sequential = parallel_map(&ParallelConfig::new(usize::MAX), &items, |&x| x * 2);

        assert_eq!(parallel.len(), 100);
        assert_eq!(parallel[50], 100);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_try_parallel_map_first_error() {
        let items: Vec<i32> = (0..10).collect();
        let result: Result<Vec<i32>, i32> =
            try_parallel_map(&ParallelConfig::new(1), &items, |&x| {
                if x % 4 == 3 {
                    Err(x)
                } else {
                    Ok(x)
                }
            });
        assert_eq!(result, Err(3));

        let ok: Result<Vec<i32>, i32> = try_parallel_map(&ParallelConfig::default(), &items, |&x| Ok(x));
        assert_eq!(ok.unwrap().len(), 10);
    }

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(!config.should_parallelize(3));
        assert!(config.should_parallelize(4));
    }
}
