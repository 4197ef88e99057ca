//! Rendering of command results as tables, JSON or CSV.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use venture_core::types::{Scenario, SimulationResult};
use venture_risk::metrics::{Histogram, RiskMetrics};
use venture_risk::scenarios::{RankedScenario, SensitivityAnalysis};

use crate::Result;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
}

/// Opaque record of one simulation, as a persistence collaborator would
/// store it.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRecord {
    /// Simulated scenario
    pub scenario: Scenario,
    /// Full simulation output, including per-trial samples
    pub result: SimulationResult,
    /// Risk metrics of `result`
    pub metrics: RiskMetrics,
    /// NPV distribution of `result`
    pub npv_histogram: Histogram,
    /// Creation time (UTC)
    pub generated_at: DateTime<Utc>,
}

impl SimulationRecord {
    /// Bundles a simulation with its metrics, stamped with the current time.
    pub fn new(
        scenario: Scenario,
        result: SimulationResult,
        metrics: RiskMetrics,
        npv_histogram: Histogram,
    ) -> Self {
        Self {
            scenario,
            result,
            metrics,
            npv_histogram,
            generated_at: Utc::now(),
        }
    }
}

/// Writes simulation records.
///
/// CSV output holds one row per trial: `scenario,trial,npv,roi,break_even_period`.
/// Tables list every metric followed by the NPV histogram.
pub fn write_simulations<W: Write>(
    out: &mut W,
    format: OutputFormat,
    records: &[SimulationRecord],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["scenario", "trial", "npv", "roi", "break_even_period"])?;
            for record in records {
                let result = &record.result;
                let rows = result
                    .npv_values()
                    .iter()
                    .zip(result.roi_values())
                    .zip(result.break_even_periods());
                for (trial, ((npv, roi), period)) in rows.enumerate() {
                    writer.write_record(&[
                        result.scenario_name().to_string(),
                        trial.to_string(),
                        npv.to_string(),
                        roi.to_string(),
                        period.to_string(),
                    ])?;
                }
            }
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            for record in records {
                write_metrics_table(
                    out,
                    record.result.scenario_name(),
                    record.result.n_trials(),
                    &record.metrics,
                )?;
                write_histogram(out, &record.npv_histogram)?;
            }
            Ok(())
        }
    }
}

/// Writes a scenario ranking.
pub fn write_ranking<W: Write>(
    out: &mut W,
    format: OutputFormat,
    ranking: &[RankedScenario],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, ranking),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record([
                "rank",
                "scenario",
                "score",
                "mean_npv",
                "success_probability",
                "var_95",
                "cvar_95",
            ])?;
            for row in ranking {
                writer.write_record(&[
                    row.rank.to_string(),
                    row.scenario_name.clone(),
                    row.score.to_string(),
                    row.metrics.mean_npv.to_string(),
                    row.metrics.success_probability.to_string(),
                    row.metrics.var_95.to_string(),
                    row.metrics.cvar_95.to_string(),
                ])?;
            }
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(out, "┌──────┬──────────────────────┬─────────┬────────────────┬───────────┐")?;
            writeln!(out, "│ Rank │ Scenario             │ Score   │ Mean NPV       │ Success % │")?;
            writeln!(out, "├──────┼──────────────────────┼─────────┼────────────────┼───────────┤")?;
            for row in ranking {
                writeln!(
                    out,
                    "│ {:>4} │ {:<20} │ {:>7.4} │ {:>14.2} │ {:>9.2} │",
                    row.rank,
                    truncate(&row.scenario_name, 20),
                    row.score,
                    row.metrics.mean_npv,
                    row.metrics.success_probability
                )?;
            }
            writeln!(out, "└──────┴──────────────────────┴─────────┴────────────────┴───────────┘")?;
            Ok(())
        }
    }
}

/// Writes a sensitivity analysis.
///
/// CSV output holds one row per simulated point:
/// `parameter,value,mean_npv,success_probability`.
pub fn write_sensitivity<W: Write>(
    out: &mut W,
    format: OutputFormat,
    scenario_name: &str,
    analysis: &SensitivityAnalysis,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, analysis),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["parameter", "value", "mean_npv", "success_probability"])?;
            for sweep in &analysis.parameters {
                for i in 0..sweep.len() {
                    writer.write_record(&[
                        sweep.parameter.to_string(),
                        sweep.values[i].to_string(),
                        sweep.mean_npv_per_value[i].to_string(),
                        sweep.success_prob_per_value[i].to_string(),
                    ])?;
                }
            }
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(out, "Sensitivity of '{}'", scenario_name)?;
            for sweep in &analysis.parameters {
                writeln!(out)?;
                writeln!(out, "{} (elasticity {:.4})", sweep.parameter, sweep.elasticity)?;
                writeln!(out, "┌────────────────┬────────────────┬───────────┐")?;
                writeln!(out, "│ Value          │ Mean NPV       │ Success % │")?;
                writeln!(out, "├────────────────┼────────────────┼───────────┤")?;
                for i in 0..sweep.len() {
                    writeln!(
                        out,
                        "│ {:>14.4} │ {:>14.2} │ {:>9.2} │",
                        sweep.values[i],
                        sweep.mean_npv_per_value[i],
                        sweep.success_prob_per_value[i]
                    )?;
                }
                writeln!(out, "└────────────────┴────────────────┴───────────┘")?;
            }
            if analysis.cancelled {
                writeln!(out)?;
                writeln!(out, "(sweep cancelled; results are partial)")?;
            }
            Ok(())
        }
    }
}

fn write_metrics_table<W: Write>(
    out: &mut W,
    name: &str,
    n_trials: usize,
    metrics: &RiskMetrics,
) -> Result<()> {
    writeln!(out, "{} ({} trials)", name, n_trials)?;
    writeln!(out, "┌───────────────────────────────┬────────────────┐")?;
    for (kind, value) in metrics.entries() {
        writeln!(out, "│ {:<29} │ {:>14.4} │", kind.as_str(), value)?;
    }
    writeln!(out, "└───────────────────────────────┴────────────────┘")?;
    writeln!(out)?;
    Ok(())
}

const HISTOGRAM_BAR_WIDTH: usize = 40;

fn write_histogram<W: Write>(out: &mut W, histogram: &Histogram) -> Result<()> {
    writeln!(out, "NPV distribution")?;
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in histogram.counts.iter().enumerate() {
        let bar = (count * HISTOGRAM_BAR_WIDTH).div_ceil(peak);
        writeln!(
            out,
            "{:>14.2} .. {:>14.2} │ {:<width$} {}",
            histogram.edges[i],
            histogram.edges[i + 1],
            "█".repeat(bar),
            count,
            width = HISTOGRAM_BAR_WIDTH
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max - 1).collect();
        t.push('…');
        t
    }
}
