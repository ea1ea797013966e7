//! CLI subcommands.

pub mod batch;
pub mod run;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use crate::adapters::AnthropicProvider;
use crate::application::{CapabilitySet, RunOrchestrator};
use crate::cli::output::CommandOutput;
use crate::domain::models::{Config, RunOutcome};
use crate::domain::ports::PlanReviewer;
use crate::infrastructure::reports::{ReportPaths, ReportWriter};

/// Build the capability set: every LLM-backed port is served by one
/// Anthropic provider, the checkpoint by the given reviewer.
pub fn capabilities(config: &Config, reviewer: Arc<dyn PlanReviewer>) -> Result<CapabilitySet> {
    let Some(api_key) = AnthropicProvider::api_key_from_env() else {
        bail!("ANTHROPIC_API_KEY is not set; export it or add it to your environment");
    };
    let provider = Arc::new(
        AnthropicProvider::new(config.anthropic.clone(), &api_key)
            .context("failed to initialize the Anthropic provider")?,
    );

    Ok(CapabilitySet {
        planner: provider.clone(),
        researcher: provider.clone(),
        evaluator: provider.clone(),
        single_shot: provider.clone(),
        comparator: provider.clone(),
        fact_checker: provider,
        reviewer,
    })
}

/// Execute one full run for a theme and persist its reports.
pub async fn run_one(
    theme: &str,
    config: &Config,
    reviewer: Arc<dyn PlanReviewer>,
    output_dir: &str,
) -> Result<RunSummary> {
    let orchestrator = RunOrchestrator::new(capabilities(config, reviewer)?);
    let outcome = orchestrator
        .execute(theme, config.max_iterations)
        .await
        .map_err(anyhow::Error::from)?;

    let paths = ReportWriter::new(output_dir).write_all(&outcome).await?;
    Ok(RunSummary::new(&outcome, paths))
}

/// Headline numbers and report locations for one completed run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub theme: String,
    pub iterations: usize,
    pub simple_total: u16,
    pub agentic_total: u16,
    pub simple_passes: bool,
    pub agentic_passes: bool,
    pub axes: Vec<AxisSummary>,
    pub reports: ReportPaths,
}

#[derive(Debug, Serialize)]
pub struct AxisSummary {
    pub axis: String,
    pub simple: u8,
    pub agentic: u8,
    pub improvement_rate: f64,
}

impl RunSummary {
    fn new(outcome: &RunOutcome, reports: ReportPaths) -> Self {
        Self {
            theme: outcome.theme.clone(),
            iterations: outcome.evaluations.len(),
            simple_total: outcome.comparison.simple_total,
            agentic_total: outcome.comparison.agentic_total,
            simple_passes: outcome.comparison.simple_passes,
            agentic_passes: outcome.comparison.agentic_passes,
            axes: outcome
                .comparison
                .axes
                .iter()
                .map(|entry| AxisSummary {
                    axis: entry.axis.label().to_string(),
                    simple: entry.simple,
                    agentic: entry.agentic,
                    improvement_rate: entry.improvement_rate,
                })
                .collect(),
            reports,
        }
    }
}

impl CommandOutput for RunSummary {
    fn to_human(&self) -> String {
        use std::fmt::Write as _;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Axis", "One-shot", "Agentic", "Improvement"]);
        for axis in &self.axes {
            table.add_row(vec![
                axis.axis.clone(),
                format!("{}/10", axis.simple),
                format!("{}/10", axis.agentic),
                format!("{:+.1}%", axis.improvement_rate),
            ]);
        }
        table.add_row(vec![
            "total".to_string(),
            format!("{}/60", self.simple_total),
            format!("{}/60", self.agentic_total),
            String::new(),
        ]);

        let mut out = format!(
            "Comparison complete for: {}\nIterations executed: {}\n\n{table}\n",
            self.theme, self.iterations
        );
        let _ = writeln!(
            out,
            "\nPass line 48/60: one-shot {}, agentic {}.",
            if self.simple_passes { "passes" } else { "fails" },
            if self.agentic_passes { "passes" } else { "fails" },
        );
        let _ = writeln!(
            out,
            "\nReports:\n  {}\n  {}\n  {}\n  {}",
            self.reports.simple.display(),
            self.reports.agentic.display(),
            self.reports.comparison.display(),
            self.reports.raw.display(),
        );
        out
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
