//! Domain errors for the tandem comparison runner.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors a capability provider can surface through a port.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A capability returned structurally invalid data: an axis score out of
    /// range, a plan with the wrong area count, a missing field.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// The underlying search/LLM call failed or timed out.
    #[error("capability failure: {0}")]
    Capability(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Phase of a comparison run. Attached to fatal errors so the caller can see
/// where the run died, and used by the cycle controller as its state label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    SingleShot,
    Planning,
    PlanReview,
    Researching,
    FactChecking,
    Evaluating,
    Refining,
    Scoring,
    Comparing,
    Stopped,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SingleShot => "single-shot",
            Self::Planning => "planning",
            Self::PlanReview => "plan-review",
            Self::Researching => "researching",
            Self::FactChecking => "fact-checking",
            Self::Evaluating => "evaluating",
            Self::Refining => "refining",
            Self::Scoring => "scoring",
            Self::Comparing => "comparing",
            Self::Stopped => "stopped",
        };
        f.write_str(label)
    }
}

/// A fatal run error: the provider failure plus the phase and iteration at
/// which it occurred. Runs are never retried or salvaged past one of these.
#[derive(Debug, Error)]
pub struct RunError {
    pub phase: RunPhase,
    pub iteration: Option<u32>,
    #[source]
    pub source: ProviderError,
}

impl RunError {
    pub fn during(phase: RunPhase, iteration: Option<u32>, source: ProviderError) -> Self {
        Self {
            phase,
            iteration,
            source,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iteration {
            Some(i) => write!(f, "{} failed at iteration {}: {}", self.phase, i, self.source),
            None => write!(f, "{} failed: {}", self.phase, self.source),
        }
    }
}

pub type RunResult<T> = Result<T, RunError>;
