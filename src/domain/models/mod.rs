//! Domain models: pure value types with no I/O.

pub mod comparison;
pub mod config;
pub mod context;
pub mod evaluation;
pub mod fact_check;
pub mod outcome;
pub mod plan;
pub mod research;

pub use comparison::{AxisComparison, ComparisonNarrative, ComparisonRecord};
pub use config::{AnthropicConfig, Config, LoggingConfig};
pub use context::{finding_key, CycleContext, FINDING_KEY_LEN};
pub use evaluation::{Assessment, Axis, AxisScores, EvaluationResult};
pub use fact_check::{
    Confidence, FactCheckRecord, FactCheckReport, RemovedEvidence, RemovedFinding,
    VerificationStatus, VerifiedEvidence, VerifiedFinding,
};
pub use outcome::{CycleOutcome, RawIteration, RunOutcome};
pub use plan::SearchPlan;
pub use research::{Evidence, Finding, ResearchResult, SimpleSearchResult};
