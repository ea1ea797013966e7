//! `tandem run`: one comparison run for a theme.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::adapters::{AutoAcceptReviewer, ConsolePlanReviewer};
use crate::cli::commands::run_one;
use crate::cli::output::output;
use crate::domain::models::Config;
use crate::domain::ports::PlanReviewer;
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Research theme to investigate
    pub theme: Option<String>,

    /// Read the theme from a file instead
    #[arg(long, conflicts_with = "theme")]
    pub theme_file: Option<PathBuf>,

    /// Iteration ceiling for the research cycle (overrides config)
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Directory reports are written to (overrides config)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Accept the generated plan without the interactive checkpoint
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Load configuration from this file instead of the default chain
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: RunArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.max_iterations, args.output_dir)?;
    let theme = resolve_theme(args.theme, args.theme_file.as_deref()).await?;

    let reviewer: Arc<dyn PlanReviewer> = if args.yes || json {
        // JSON mode is for unattended use; never block on stdin there.
        Arc::new(AutoAcceptReviewer)
    } else {
        Arc::new(ConsolePlanReviewer)
    };

    let summary = run_one(&theme, &config, reviewer, &config.output_dir).await?;
    output(&summary, json);
    Ok(())
}

pub(super) fn load_config(
    path: Option<&std::path::Path>,
    max_iterations: Option<u32>,
    output_dir: Option<String>,
) -> Result<Config> {
    let mut config = match path {
        Some(p) => ConfigLoader::load_from_file(p)?,
        None => ConfigLoader::load()?,
    };
    if let Some(n) = max_iterations {
        config.max_iterations = n;
    }
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    ConfigLoader::validate(&config)?;
    Ok(config)
}

pub(super) async fn resolve_theme(
    theme: Option<String>,
    theme_file: Option<&std::path::Path>,
) -> Result<String> {
    match (theme, theme_file) {
        (Some(theme), None) => {
            let trimmed = theme.trim().to_string();
            if trimmed.is_empty() {
                bail!("theme is empty");
            }
            Ok(trimmed)
        }
        (None, Some(path)) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read theme file {}", path.display()))?;
            let trimmed = content.trim().to_string();
            if trimmed.is_empty() {
                bail!("theme file {} is empty", path.display());
            }
            Ok(trimmed)
        }
        (None, None) => bail!("provide a theme argument or --theme-file"),
        (Some(_), Some(_)) => unreachable!("clap rejects theme together with --theme-file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[tokio::test]
    async fn theme_argument_is_trimmed() {
        let theme = resolve_theme(Some("  future of rail freight  ".into()), None)
            .await
            .unwrap();
        assert_eq!(theme, "future of rail freight");
    }

    #[tokio::test]
    async fn missing_theme_is_an_error() {
        assert!(resolve_theme(None, None).await.is_err());
    }

    #[tokio::test]
    async fn theme_file_is_read_and_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid-scale storage economics").unwrap();
        file.flush().unwrap();

        let theme = resolve_theme(None, Some(file.path())).await.unwrap();
        assert_eq!(theme, "grid-scale storage economics");
    }

    #[tokio::test]
    async fn empty_theme_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(resolve_theme(None, Some(file.path())).await.is_err());
    }

    #[test]
    fn cli_overrides_win_over_config_defaults() {
        let config = load_config(None, Some(2), Some("elsewhere".into())).unwrap();
        assert_eq!(config.max_iterations, 2);
        assert_eq!(config.output_dir, "elsewhere");
    }
}
