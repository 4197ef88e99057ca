//! Monte Carlo engine configuration.
//!
//! This module provides the configuration type and builder for the
//! simulation engine. The trial count is the only business-relevant setting;
//! the seed and parallel threshold control reproducibility and scheduling.

use super::error::ConfigError;

/// Maximum number of trials allowed per `simulate` call.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Default number of trials.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Default base seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default minimum trial count before trials are run on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_024;

/// Monte Carlo engine configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`EngineConfigBuilder`] to construct customised instances.
///
/// # Examples
///
/// ```rust
/// use venture_engine::mc::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .n_simulations(5_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_simulations(), 5_000);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of trials per `simulate` call.
    n_simulations: usize,
    /// Base seed from which every trial substream is derived.
    seed: u64,
    /// Trial count at or above which trials run in parallel.
    parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            n_simulations: DEFAULT_SIMULATIONS,
            seed: DEFAULT_SEED,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration builder populated with the defaults.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Returns the number of trials per `simulate` call.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the parallel threshold.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns whether a run of `n_trials` should use the rayon pool.
    #[inline]
    pub fn should_parallelize(&self, n_trials: usize) -> bool {
        n_trials >= self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_simulations` is 0 or greater than 10,000,000
    /// - `parallel_threshold` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 || self.n_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.n_simulations));
        }
        if self.parallel_threshold == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "parallel_threshold",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`].
///
/// Provides a fluent API for constructing engine configurations with
/// validation at build time.
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Sets the number of trials.
    ///
    /// # Arguments
    ///
    /// * `n_simulations` - Number of trials in [1, 10_000_000]
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.config.n_simulations = n_simulations;
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the trial count from which trials run in parallel.
    ///
    /// Use `usize::MAX` to force sequential execution.
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
