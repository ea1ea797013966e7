//! Command-line interface.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use console::style;

/// Compare a one-shot web search against an iterative agentic
/// investigation of the same research theme.
#[derive(Parser, Debug)]
#[command(name = "tandem", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit structured JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one comparison for a theme
    Run(commands::run::RunArgs),
    /// Run comparisons for every theme file in a directory
    Batch(commands::batch::BatchArgs),
}

/// Print a fatal error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    std::process::exit(1);
}
