//! Common test utilities for integration tests
//!
//! Scripted capability providers and fixture builders shared across the
//! cycle and orchestrator test suites.

// Each test binary compiles this module and uses a subset of it.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use tandem::domain::errors::{ProviderError, ProviderResult};
use tandem::domain::models::{
    Assessment, AxisScores, ComparisonNarrative, CycleContext, EvaluationResult, Evidence,
    FactCheckReport, Finding, ResearchResult, SearchPlan, SimpleSearchResult, VerifiedEvidence,
    VerifiedFinding,
};
use tandem::domain::ports::{
    Comparator, Evaluator, FactChecker, PlanReview, PlanReviewer, PlanRevision, Planner,
    Researcher, SingleShotSearcher,
};

/// A valid five-area plan.
pub fn plan(objective: &str) -> SearchPlan {
    let areas = ["market", "technology", "competition", "regulation", "cases"];
    SearchPlan {
        objective: objective.into(),
        research_areas: areas.iter().map(ToString::to_string).collect(),
        search_keywords: BTreeMap::new(),
        priority_order: areas.iter().map(ToString::to_string).collect(),
        research_strategy: "broad first, then depth".into(),
        expected_outcomes: vec!["a defensible answer".into()],
    }
}

pub fn scores(values: [u8; 6]) -> AxisScores {
    AxisScores::new(values[0], values[1], values[2], values[3], values[4], values[5])
}

pub fn assessment(values: [u8; 6]) -> Assessment {
    Assessment {
        scores: scores(values),
        coverage_gaps: vec![],
        refinement_strategy: None,
        refined_plan: None,
        expert_observations: String::new(),
    }
}

pub fn simple_result(theme: &str) -> SimpleSearchResult {
    SimpleSearchResult {
        theme: theme.into(),
        findings: vec![Finding {
            content: "one-shot finding".into(),
            source: "https://simple.example/1".into(),
        }],
        evidence: vec![Evidence {
            title: "simple source".into(),
            url: "https://simple.example/1".into(),
            summary: "quick look".into(),
        }],
        summary: "breadth without depth".into(),
        coverage_areas: vec!["market".into(), "technology".into()],
    }
}

/// Researcher that fabricates a deterministic result per iteration and
/// records the plan objective it was called with.
pub struct StubResearcher {
    pub calls: AtomicU32,
    pub seen_objectives: Mutex<Vec<String>>,
    /// When true, every result has empty findings and evidence.
    pub produce_empty: bool,
}

impl StubResearcher {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
            seen_objectives: Mutex::new(Vec::new()),
            produce_empty: false,
        }
    }

    pub fn empty_handed() -> Self {
        Self {
            produce_empty: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Researcher for StubResearcher {
    async fn research(
        &self,
        theme: &str,
        plan: &SearchPlan,
        iteration: u32,
        _context: &CycleContext,
    ) -> ProviderResult<ResearchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_objectives
            .lock()
            .unwrap()
            .push(plan.objective.clone());

        let (findings, evidence) = if self.produce_empty {
            (vec![], vec![])
        } else {
            (
                vec![Finding {
                    content: format!("finding from iteration {iteration}"),
                    source: format!("https://source.example/{iteration}"),
                }],
                vec![Evidence {
                    title: format!("source {iteration}"),
                    url: format!("https://source.example/{iteration}"),
                    summary: "supports the finding".into(),
                }],
            )
        };

        Ok(ResearchResult {
            theme: theme.into(),
            plan_used: plan.clone(),
            findings,
            evidence,
            depth_analysis: format!("depth at iteration {iteration}"),
            interconnections: vec![],
            summary: format!("summary {iteration}"),
            iteration_number: iteration,
        })
    }
}

/// Researcher that always fails.
pub struct FailingResearcher;

#[async_trait]
impl Researcher for FailingResearcher {
    async fn research(
        &self,
        _theme: &str,
        _plan: &SearchPlan,
        _iteration: u32,
        _context: &CycleContext,
    ) -> ProviderResult<ResearchResult> {
        Err(ProviderError::Capability("search backend down".into()))
    }
}

/// Evaluator that pops one scripted assessment per call.
pub struct ScriptedEvaluator {
    script: Mutex<Vec<Assessment>>,
    pub calls: AtomicU32,
}

impl ScriptedEvaluator {
    pub fn new(script: Vec<Assessment>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Evaluator for ScriptedEvaluator {
    async fn assess(
        &self,
        _result: &ResearchResult,
        _context: &CycleContext,
    ) -> ProviderResult<Assessment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            panic!("scripted evaluator ran out of assessments");
        }
        Ok(script.remove(0))
    }
}

/// Fact checker that verifies everything it is shown.
pub struct VerifyAllChecker {
    pub calls: AtomicU32,
}

impl VerifyAllChecker {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactChecker for VerifyAllChecker {
    async fn verify(&self, result: &ResearchResult) -> ProviderResult<FactCheckReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let verified_findings: Vec<VerifiedFinding> = result
            .findings
            .iter()
            .map(|f| VerifiedFinding {
                content: f.content.clone(),
                source: f.source.clone(),
                source_url: String::new(),
                confidence: tandem::domain::models::Confidence::High,
            })
            .collect();
        let verified_evidence: Vec<VerifiedEvidence> = result
            .evidence
            .iter()
            .map(|e| VerifiedEvidence {
                title: e.title.clone(),
                url: e.url.clone(),
                original_url: e.url.clone(),
                summary: e.summary.clone(),
                status: tandem::domain::models::VerificationStatus::Verified,
                verification_note: String::new(),
            })
            .collect();
        let total = verified_findings.len();
        Ok(FactCheckReport {
            verified_evidence,
            removed_evidence: vec![],
            verified_findings,
            removed_findings: vec![],
            verification_summary: "all sources verified".into(),
            total_verified: total,
            total_removed: 0,
            reliability_score: 1.0,
        })
    }
}

/// Fact checker that removes everything it is shown.
pub struct RejectAllChecker;

#[async_trait]
impl FactChecker for RejectAllChecker {
    async fn verify(&self, result: &ResearchResult) -> ProviderResult<FactCheckReport> {
        Ok(FactCheckReport {
            verified_evidence: vec![],
            removed_evidence: result
                .evidence
                .iter()
                .map(|e| tandem::domain::models::RemovedEvidence {
                    title: e.title.clone(),
                    original_url: e.url.clone(),
                    reason: "URL does not resolve".into(),
                })
                .collect(),
            verified_findings: vec![],
            removed_findings: result
                .findings
                .iter()
                .map(|f| tandem::domain::models::RemovedFinding {
                    content: f.content.clone(),
                    source: f.source.clone(),
                    reason: "no corroborating source".into(),
                })
                .collect(),
            verification_summary: "nothing verified".into(),
            total_verified: 0,
            total_removed: result.findings.len(),
            reliability_score: 0.0,
        })
    }
}

/// Planner with a fixed draft plan; revision swaps in a marked objective.
pub struct StubPlanner {
    pub draft_calls: AtomicU32,
    pub revise_calls: AtomicU32,
}

impl StubPlanner {
    pub fn new() -> Self {
        Self {
            draft_calls: AtomicU32::new(0),
            revise_calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Planner for StubPlanner {
    async fn plan(
        &self,
        theme: &str,
        revision: Option<PlanRevision<'_>>,
    ) -> ProviderResult<SearchPlan> {
        match revision {
            None => {
                self.draft_calls.fetch_add(1, Ordering::SeqCst);
                Ok(plan(&format!("drafted for {theme}")))
            }
            Some(r) => {
                self.revise_calls.fetch_add(1, Ordering::SeqCst);
                Ok(plan(&format!("revised: {}", r.instructions)))
            }
        }
    }
}

/// Planner that returns a structurally invalid plan (too few areas).
pub struct BrokenPlanner;

#[async_trait]
impl Planner for BrokenPlanner {
    async fn plan(
        &self,
        theme: &str,
        _revision: Option<PlanRevision<'_>>,
    ) -> ProviderResult<SearchPlan> {
        let mut p = plan(theme);
        p.research_areas.truncate(3);
        p.priority_order.truncate(3);
        Ok(p)
    }
}

pub struct StubSingleShot;

#[async_trait]
impl SingleShotSearcher for StubSingleShot {
    async fn search(&self, theme: &str) -> ProviderResult<SimpleSearchResult> {
        Ok(simple_result(theme))
    }
}

pub struct FailingSingleShot;

#[async_trait]
impl SingleShotSearcher for FailingSingleShot {
    async fn search(&self, _theme: &str) -> ProviderResult<SimpleSearchResult> {
        Err(ProviderError::Capability("search quota exhausted".into()))
    }
}

/// Comparator returning a canned narrative and recording the history
/// length it was shown.
pub struct StubComparator {
    pub seen_history_len: AtomicU32,
}

impl StubComparator {
    pub fn new() -> Self {
        Self {
            seen_history_len: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Comparator for StubComparator {
    async fn compare(
        &self,
        _simple: &SimpleSearchResult,
        _agentic: &ResearchResult,
        history: &[EvaluationResult],
    ) -> ProviderResult<ComparisonNarrative> {
        self.seen_history_len
            .store(history.len() as u32, Ordering::SeqCst);
        Ok(ComparisonNarrative {
            key_differences: vec!["iteration depth".into()],
            simple_strengths: vec!["fast".into()],
            simple_weaknesses: vec!["shallow".into()],
            agentic_strengths: vec!["verified sources".into()],
            agentic_weaknesses: vec!["slower".into()],
            recommendation: "agentic for decisions, one-shot for orientation".into(),
            cost_effectiveness_analysis: "several times the API spend".into(),
        })
    }
}

/// Reviewer that accepts, or revises exactly once with fixed instructions.
pub struct ScriptedReviewer {
    revision: Mutex<Option<String>>,
}

impl ScriptedReviewer {
    pub fn accepting() -> Self {
        Self {
            revision: Mutex::new(None),
        }
    }

    pub fn revising(instructions: &str) -> Self {
        Self {
            revision: Mutex::new(Some(instructions.into())),
        }
    }
}

#[async_trait]
impl PlanReviewer for ScriptedReviewer {
    async fn review(&self, _plan: &SearchPlan) -> ProviderResult<PlanReview> {
        match self.revision.lock().unwrap().take() {
            Some(instructions) => Ok(PlanReview::Revise(instructions)),
            None => Ok(PlanReview::Accept),
        }
    }
}
