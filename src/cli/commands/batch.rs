//! `tandem batch`: unattended comparison runs for a directory of themes.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

use crate::adapters::AutoAcceptReviewer;
use crate::cli::commands::{run::load_config, run::resolve_theme, run_one};
use crate::cli::output::output;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing theme files (.txt or .md)
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Write each theme's reports into its own subdirectory
    #[arg(long)]
    pub output_subdir: bool,

    /// Iteration ceiling for every run (overrides config)
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Base directory reports are written to (overrides config)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Load configuration from this file instead of the default chain
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: BatchArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.max_iterations, args.output_dir)?;
    let theme_files = collect_theme_files(&args.input_dir).await?;
    if theme_files.is_empty() {
        bail!(
            "no theme files (.txt, .md) found in {}",
            args.input_dir.display()
        );
    }

    let progress = if json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(theme_files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let mut failures = 0usize;
    for path in &theme_files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.set_message(stem.clone());

        let output_dir = if args.output_subdir {
            format!("{}/{stem}", config.output_dir)
        } else {
            config.output_dir.clone()
        };

        // One failed theme must not sink the rest of the batch.
        match resolve_theme(None, Some(path.as_path())).await {
            Ok(theme) => {
                match run_one(&theme, &config, Arc::new(AutoAcceptReviewer), &output_dir).await {
                    Ok(summary) => output(&summary, json),
                    Err(err) => {
                        failures += 1;
                        error!(file = %path.display(), "run failed: {err:#}");
                        if !json {
                            eprintln!(
                                "{} {}: {err:#}",
                                style("failed").red().bold(),
                                path.display()
                            );
                        }
                    }
                }
            }
            Err(err) => {
                failures += 1;
                error!(file = %path.display(), "skipping: {err:#}");
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if failures > 0 {
        bail!("{failures} of {} runs failed", theme_files.len());
    }
    Ok(())
}

async fn collect_theme_files(dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("input directory not found: {}", dir.display());
    }
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_theme = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "txt" || ext == "md");
        if is_theme {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
