//! Research output models shared by both search strategies.

use serde::{Deserialize, Serialize};

use crate::domain::models::plan::SearchPlan;

/// A single fact or insight pulled out of a search pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The finding itself.
    #[serde(default)]
    pub content: String,
    /// Where it came from.
    #[serde(default)]
    pub source: String,
}

/// A source backing one or more findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
}

/// Output of one iteration of the agentic research cycle.
///
/// Immutable once produced; each iteration supersedes the previous one and
/// the controller keeps the latest as the terminal result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    pub theme: String,
    /// The plan this result was produced under.
    pub plan_used: SearchPlan,
    /// Systematic findings, 20-40 in a full iteration.
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// How deeply each area was explored.
    #[serde(default)]
    pub depth_analysis: String,
    /// Cross-area relationships the researcher identified.
    #[serde(default)]
    pub interconnections: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// 1-based iteration this result belongs to.
    pub iteration_number: u32,
}

/// Output of the one-shot broad search phase. Produced once, immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleSearchResult {
    #[serde(default)]
    pub theme: String,
    /// 10-20 headline findings.
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub summary: String,
    /// Areas the single pass managed to touch.
    #[serde(default)]
    pub coverage_areas: Vec<String>,
}

impl SimpleSearchResult {
    /// Reshape the one-shot result so the evaluator contract can score it.
    ///
    /// The one-shot schema carries no axis scores, so the orchestrator runs
    /// the evaluator over this iteration-0 view to obtain the simple-side
    /// scores the comparison needs. The synthesized plan is a scoring aid,
    /// not a real plan, and is never validated against the planner bounds.
    pub fn as_research_result(&self) -> ResearchResult {
        let plan = SearchPlan {
            objective: format!("Broad one-shot survey of: {}", self.theme),
            research_areas: self.coverage_areas.clone(),
            search_keywords: std::collections::BTreeMap::new(),
            priority_order: self.coverage_areas.clone(),
            research_strategy: "single comprehensive search pass".into(),
            expected_outcomes: Vec::new(),
        };
        ResearchResult {
            theme: self.theme.clone(),
            plan_used: plan,
            findings: self.findings.clone(),
            evidence: self.evidence.clone(),
            depth_analysis: String::new(),
            interconnections: Vec::new(),
            summary: self.summary.clone(),
            iteration_number: 0,
        }
    }
}
