//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use venture_engine::mc::{
    EngineConfig, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SEED, DEFAULT_SIMULATIONS, MAX_SIMULATIONS,
};

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "venture.toml";

/// Environment variable overriding the trial count.
pub const ENV_N_SIMULATIONS: &str = "VENTURE_N_SIMULATIONS";
/// Environment variable overriding the base seed.
pub const ENV_SEED: &str = "VENTURE_SEED";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "VENTURE_LOG_LEVEL";
/// Environment variable overriding the worker thread count.
pub const ENV_THREADS: &str = "VENTURE_THREADS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A setting holds an unusable value.
    #[error("Invalid {name}: {value}")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// Offending value
        value: String,
    },

    /// The configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-trial spans
    Trace,
    /// Per-simulation spans and sweep points
    Debug,
    /// Progress messages
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Trials per simulation
    pub n_simulations: usize,
    /// Base seed of the engine
    pub seed: u64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Worker threads in the global rayon pool
    pub threads: usize,
    /// Trial count from which a simulation runs in parallel
    pub parallel_threshold: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            n_simulations: DEFAULT_SIMULATIONS,
            seed: DEFAULT_SEED,
            log_level: LogLevel::Info,
            threads: num_cpus::get(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Only variables that are set override the current values.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_N_SIMULATIONS) {
            self.n_simulations = parse_setting(ENV_N_SIMULATIONS, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.seed = parse_setting(ENV_SEED, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }
        if let Some(value) = lookup(ENV_THREADS) {
            self.threads = parse_setting(ENV_THREADS, &value)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 || self.n_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidValue {
                name: "n_simulations",
                value: format!("{} (must be in [1, {}])", self.n_simulations, MAX_SIMULATIONS),
            });
        }
        if self.threads == 0 {
            return Err(ConfigError::InvalidValue {
                name: "threads",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        if self.parallel_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                name: "parallel_threshold",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(n) = cli.n_simulations {
            self.n_simulations = n;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(threads) = cli.threads {
            self.threads = threads;
        }
        Ok(())
    }

    /// Engine configuration for this run
    pub fn engine_config(&self) -> Result<EngineConfig, venture_engine::mc::ConfigError> {
        EngineConfig::builder()
            .n_simulations(self.n_simulations)
            .seed(self.seed)
            .parallel_threshold(self.parallel_threshold)
            .build()
    }
}

fn parse_setting<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Trial count override
    pub n_simulations: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Thread count override
    pub threads: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit, or `venture.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.n_simulations, 10_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.threads >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml_str("n_simulations = 2500\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.n_simulations, 2_500);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(CliConfig::from_toml_str("n_simulations = 0").is_err());
        assert!(CliConfig::from_toml_str("log_level = \"loud\"").is_err());
        assert!(CliConfig::from_toml_str("n_simulations = ").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[(ENV_SEED, "7"), (ENV_THREADS, "3")]))
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.threads, 3);
        assert_eq!(config.n_simulations, 10_000);

        let err = config
            .apply_env(env(&[(ENV_N_SIMULATIONS, "many")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: ENV_N_SIMULATIONS,
                ..
            }
        ));
    }

    #[test]
    fn test_priority_cli_over_env_over_file() {
        let dir = std::env::temp_dir().join(format!("venture_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("priority.toml");
        std::fs::write(&path, "n_simulations = 100\nseed = 1\nthreads = 2\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            seed: Some(3),
            ..Default::default()
        };
        let config =
            build_config_with_env(&cli, env(&[(ENV_SEED, "2"), (ENV_N_SIMULATIONS, "200")]))
                .unwrap();

        assert_eq!(config.n_simulations, 200);
        assert_eq!(config.seed, 3);
        assert_eq!(config.threads, 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_explicit_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/venture.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with_env(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_engine_config() {
        let config = CliConfig {
            n_simulations: 1_234,
            seed: 9,
            ..Default::default()
        };
        let engine = config.engine_config().unwrap();
        assert_eq!(engine.n_simulations(), 1_234);
        assert_eq!(engine.seed(), 9);
    }
}
