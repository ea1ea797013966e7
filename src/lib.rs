//! Tandem - Research Strategy Comparison Orchestrator
//!
//! Tandem answers one question about agentic research: how much better is
//! a multi-round plan-research-evaluate-refine cycle than a single broad
//! search pass over the same theme? It runs both strategies through
//! swappable capability providers, gates each research iteration on a
//! six-axis quality score, and produces a quantitative and qualitative
//! comparison of the two terminal results.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure models, port contracts, and errors
//! - **Services Layer** (`services`): Pure decision logic - scoring gate,
//!   plan merger, comparison aggregator
//! - **Application Layer** (`application`): The research cycle controller
//!   and the run orchestrator
//! - **Adapters** (`adapters`): Anthropic-backed capability providers and
//!   the console checkpoint
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading and
//!   report persistence
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use tandem::application::{CapabilitySet, RunOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Build a CapabilitySet and execute a run
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{CapabilitySet, CycleController, RunOrchestrator};
pub use domain::errors::{ProviderError, RunError, RunPhase};
pub use domain::models::{
    Assessment, Axis, AxisScores, ComparisonNarrative, ComparisonRecord, Config, CycleContext,
    CycleOutcome, EvaluationResult, Evidence, FactCheckReport, Finding, ResearchResult,
    RunOutcome, SearchPlan, SimpleSearchResult,
};
pub use domain::ports::{
    Comparator, Evaluator, FactChecker, PlanReview, PlanReviewer, Planner, Researcher,
    SingleShotSearcher,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{gate, merge};
