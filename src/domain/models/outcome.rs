//! Terminal artifacts of a comparison run.

use serde::{Deserialize, Serialize};

use crate::domain::models::comparison::ComparisonRecord;
use crate::domain::models::evaluation::{AxisScores, EvaluationResult};
use crate::domain::models::fact_check::FactCheckRecord;
use crate::domain::models::plan::SearchPlan;
use crate::domain::models::research::{Evidence, Finding, ResearchResult, SimpleSearchResult};

/// Untouched researcher output for one iteration, kept verbatim so report
/// URLs can be audited later. Fact-checking never edits these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIteration {
    pub iteration: u32,
    pub findings: Vec<Finding>,
    pub evidence: Vec<Evidence>,
    pub summary: String,
}

impl RawIteration {
    pub fn from_result(result: &ResearchResult) -> Self {
        Self {
            iteration: result.iteration_number,
            findings: result.findings.clone(),
            evidence: result.evidence.clone(),
            summary: result.summary.clone(),
        }
    }
}

/// Everything the research cycle hands back to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleOutcome {
    /// The plan in force when the cycle stopped.
    pub final_plan: SearchPlan,
    /// Terminal result: the last iteration's output with findings and
    /// evidence replaced by the verified-only accumulated sets.
    pub final_result: ResearchResult,
    /// One evaluation per executed iteration, in order.
    pub evaluations: Vec<EvaluationResult>,
    /// One fact-check record per executed iteration, in order.
    pub fact_checks: Vec<FactCheckRecord>,
    /// Verbatim researcher output per iteration, for auditing.
    pub raw_iterations: Vec<RawIteration>,
}

impl CycleOutcome {
    /// The evaluation that stopped the cycle.
    pub fn final_evaluation(&self) -> Option<&EvaluationResult> {
        self.evaluations.last()
    }
}

/// Everything a full comparison run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub theme: String,
    pub simple_result: SimpleSearchResult,
    /// Axis scores obtained by running the evaluator over the one-shot
    /// result; the one-shot schema itself carries no scores.
    pub simple_scores: AxisScores,
    pub final_plan: SearchPlan,
    pub final_result: ResearchResult,
    pub evaluations: Vec<EvaluationResult>,
    pub fact_checks: Vec<FactCheckRecord>,
    pub raw_iterations: Vec<RawIteration>,
    pub comparison: ComparisonRecord,
}
