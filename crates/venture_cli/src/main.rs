//! Venture CLI - Monte Carlo analysis of business scenarios
//!
//! # Commands
//!
//! - `venture simulate <scenarios.toml>` - Simulate scenarios and report risk metrics
//! - `venture compare <scenarios.toml>` - Rank scenarios by composite score
//! - `venture sensitivity <scenarios.toml> --range revenue_mean=20000:30000:5` -
//!   Sweep parameters of one scenario
//!
//! # Configuration
//!
//! Settings are taken from, in decreasing priority: command-line flags,
//! `VENTURE_*` environment variables, the TOML config file
//! (`venture.toml` by default) and built-in defaults.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venture_cli::commands;
use venture_cli::config::{build_config, CliArgs};
use venture_cli::output::OutputFormat;
use venture_cli::scenario_file::{load_scenarios, select_scenario};
use venture_engine::mc::MonteCarloEngine;

/// Monte Carlo analysis of business scenarios
#[derive(Parser)]
#[command(name = "venture")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of Monte Carlo trials per scenario
    #[arg(short = 'n', long, global = true)]
    simulations: Option<usize>,

    /// Base random seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Worker threads
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate every scenario of a file and report its risk metrics
    Simulate {
        /// Scenario file (TOML with [[scenario]] tables)
        scenarios: PathBuf,

        /// Number of NPV histogram bins
        #[arg(long, default_value_t = commands::simulate::DEFAULT_HISTOGRAM_BINS)]
        bins: usize,
    },

    /// Simulate and rank the scenarios of a file
    Compare {
        /// Scenario file (TOML with [[scenario]] tables)
        scenarios: PathBuf,
    },

    /// Sweep parameters of one scenario
    Sensitivity {
        /// Scenario file (TOML with [[scenario]] tables)
        scenarios: PathBuf,

        /// Scenario to sweep (defaults to the first one)
        #[arg(long)]
        scenario: Option<String>,

        /// Parameter range as parameter=min:max:steps (repeatable)
        #[arg(short, long = "range", required = true)]
        ranges: Vec<String>,

        /// Stop the sweep after this many seconds and report partial results
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            n_simulations: cli.simulations,
            seed: cli.seed,
            log_level: cli.log_level.clone(),
            threads: cli.threads,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli)).context("Failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()
        .context("Failed to initialise the worker pool")?;

    info!(
        version = venture_cli::VERSION,
        n_simulations = config.n_simulations,
        seed = config.seed,
        threads = config.threads,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let engine = MonteCarloEngine::new(config.engine_config()?)?;

    let output = cli.output.as_deref();
    match cli.command {
        Commands::Simulate { scenarios, bins } => commands::emit(output, |out| {
            let scenarios = load_scenarios(&scenarios)?;
            commands::simulate::run(out, &engine, scenarios, bins, cli.format)
        })?,
        Commands::Compare { scenarios } => commands::emit(output, |out| {
            let scenarios = load_scenarios(&scenarios)?;
            commands::compare::run(out, &engine, &scenarios, cli.format)
        })?,
        Commands::Sensitivity {
            scenarios,
            scenario,
            ranges,
            timeout_secs,
        } => commands::emit(output, |out| {
            let base = select_scenario(load_scenarios(&scenarios)?, scenario.as_deref())?;
            commands::sensitivity::run(
                out,
                &engine,
                &base,
                &ranges,
                timeout_secs.map(Duration::from_secs),
                cli.format,
            )
        })?,
    }

    Ok(())
}
