//! Persists the run documents to the output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tokio::fs;

use crate::domain::models::RunOutcome;
use crate::infrastructure::reports::markdown;

/// Paths of the documents one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPaths {
    pub simple: PathBuf,
    pub agentic: PathBuf,
    pub comparison: PathBuf,
    pub raw: PathBuf,
}

/// Writes the three markdown documents plus the raw per-iteration JSON
/// dump. A run leaves no other persisted state.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub async fn write_all(&self, outcome: &RunOutcome) -> Result<ReportPaths> {
        fs::create_dir_all(&self.output_dir).await.with_context(|| {
            format!("failed to create output dir {}", self.output_dir.display())
        })?;

        let now = Local::now();
        let stamp = now.format("%Y%m%d_%H%M%S").to_string();
        let executed_at = now.format("%Y-%m-%d %H:%M:%S").to_string();

        let paths = ReportPaths {
            simple: self.output_dir.join(format!("simple_search_{stamp}.md")),
            agentic: self.output_dir.join(format!("agentic_search_{stamp}.md")),
            comparison: self.output_dir.join(format!("comparison_{stamp}.md")),
            raw: self.output_dir.join(format!("raw_research_{stamp}.json")),
        };

        write_doc(&paths.simple, &markdown::render_simple(outcome, &executed_at)).await?;
        write_doc(&paths.agentic, &markdown::render_agentic(outcome, &executed_at)).await?;
        write_doc(
            &paths.comparison,
            &markdown::render_comparison(outcome, &executed_at),
        )
        .await?;

        let raw = serde_json::json!({
            "theme": outcome.theme,
            "iterations": outcome.raw_iterations,
            "fact_checks": outcome.fact_checks,
        });
        write_doc(&paths.raw, &serde_json::to_string_pretty(&raw)?).await?;

        Ok(paths)
    }
}

async fn write_doc(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
