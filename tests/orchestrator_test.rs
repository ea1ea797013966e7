//! Integration tests for the run orchestrator.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::*;
use tandem::application::{CapabilitySet, RunOrchestrator};
use tandem::domain::errors::{ProviderError, RunPhase};
use tandem::domain::models::Axis;

struct Harness {
    planner: Arc<StubPlanner>,
    researcher: Arc<StubResearcher>,
    evaluator: Arc<ScriptedEvaluator>,
    comparator: Arc<StubComparator>,
}

impl Harness {
    /// Capability set whose evaluator script ends with the single-shot
    /// scoring assessment.
    fn build(
        evaluator_script: Vec<tandem::domain::models::Assessment>,
        reviewer: ScriptedReviewer,
    ) -> (Self, RunOrchestrator) {
        let planner = Arc::new(StubPlanner::new());
        let researcher = Arc::new(StubResearcher::new());
        let evaluator = Arc::new(ScriptedEvaluator::new(evaluator_script));
        let comparator = Arc::new(StubComparator::new());

        let capabilities = CapabilitySet {
            planner: planner.clone(),
            researcher: researcher.clone(),
            evaluator: evaluator.clone(),
            single_shot: Arc::new(StubSingleShot),
            comparator: comparator.clone(),
            fact_checker: Arc::new(VerifyAllChecker::new()),
            reviewer: Arc::new(reviewer),
        };
        let orchestrator = RunOrchestrator::new(capabilities);
        (
            Self {
                planner,
                researcher,
                evaluator,
                comparator,
            },
            orchestrator,
        )
    }
}

/// The end-to-end scenario: one-shot scores 5 on every axis, the cycle
/// stops at iteration 2 with 8s everywhere. Every axis improves by 60%,
/// the agentic run passes the 48/60 line, the one-shot fails it.
#[tokio::test]
async fn end_to_end_comparison_scenario() {
    let (harness, orchestrator) = Harness::build(
        vec![
            assessment([7, 7, 7, 7, 7, 6]), // iteration 1: refine
            assessment([8, 8, 8, 8, 8, 8]), // iteration 2: pass
            assessment([5, 5, 5, 5, 5, 5]), // single-shot scoring
        ],
        ScriptedReviewer::accepting(),
    );

    let outcome = orchestrator.execute("X", 5).await.unwrap();

    assert_eq!(outcome.theme, "X");
    assert_eq!(outcome.evaluations.len(), 2);
    assert_eq!(harness.researcher.call_count(), 2);
    // Two cycle assessments plus the single-shot scoring pass.
    assert_eq!(harness.evaluator.call_count(), 3);

    let record = &outcome.comparison;
    assert_eq!(record.simple_total, 30);
    assert_eq!(record.agentic_total, 48);
    assert!(!record.simple_passes);
    assert!(record.agentic_passes);
    for axis in Axis::ALL {
        let entry = record.axis(axis).unwrap();
        assert!((entry.improvement_rate - 60.0).abs() < f64::EPSILON);
    }

    // The comparator saw the full evaluation history.
    assert_eq!(harness.comparator.seen_history_len.load(Ordering::SeqCst), 2);
    // The qualitative half came through untouched.
    assert_eq!(record.key_differences, vec!["iteration depth".to_string()]);
}

/// Empty operator input accepts the drafted plan; the planner is never
/// asked to revise.
#[tokio::test]
async fn accepting_review_skips_revision() {
    let (harness, orchestrator) = Harness::build(
        vec![
            assessment([8, 8, 8, 8, 8, 8]),
            assessment([5, 5, 5, 5, 5, 5]),
        ],
        ScriptedReviewer::accepting(),
    );

    let outcome = orchestrator.execute("theme", 3).await.unwrap();

    assert_eq!(harness.planner.draft_calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.planner.revise_calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.final_plan.objective, "drafted for theme");
}

/// Non-empty operator input routes through one planner revision and the
/// cycle runs under the revised plan.
#[tokio::test]
async fn revision_instructions_rework_the_plan() {
    let (harness, orchestrator) = Harness::build(
        vec![
            assessment([8, 8, 8, 8, 8, 8]),
            assessment([5, 5, 5, 5, 5, 5]),
        ],
        ScriptedReviewer::revising("focus on the European market"),
    );

    let outcome = orchestrator.execute("theme", 3).await.unwrap();

    assert_eq!(harness.planner.draft_calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.planner.revise_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        outcome.final_plan.objective,
        "revised: focus on the European market"
    );
    let seen = harness.researcher.seen_objectives.lock().unwrap().clone();
    assert!(seen
        .iter()
        .all(|o| o == "revised: focus on the European market"));
}

/// The one-shot result is scored through the evaluator contract and its
/// scores feed the aggregation.
#[tokio::test]
async fn single_shot_scores_come_from_the_evaluator() {
    let (_, orchestrator) = Harness::build(
        vec![
            assessment([8, 8, 8, 8, 8, 8]),
            assessment([2, 3, 4, 5, 6, 7]), // single-shot scoring
        ],
        ScriptedReviewer::accepting(),
    );

    let outcome = orchestrator.execute("theme", 3).await.unwrap();

    assert_eq!(outcome.simple_scores.objective_achievement, 2);
    assert_eq!(outcome.simple_scores.quantitative, 7);
    assert_eq!(outcome.comparison.simple_total, 27);
}

/// A failing single-shot search aborts the run before planning starts.
#[tokio::test]
async fn single_shot_failure_aborts_the_run() {
    let planner = Arc::new(StubPlanner::new());
    let capabilities = CapabilitySet {
        planner: planner.clone(),
        researcher: Arc::new(StubResearcher::new()),
        evaluator: Arc::new(ScriptedEvaluator::new(vec![])),
        single_shot: Arc::new(FailingSingleShot),
        comparator: Arc::new(StubComparator::new()),
        fact_checker: Arc::new(VerifyAllChecker::new()),
        reviewer: Arc::new(ScriptedReviewer::accepting()),
    };

    let err = RunOrchestrator::new(capabilities)
        .execute("theme", 3)
        .await
        .unwrap_err();

    assert_eq!(err.phase, RunPhase::SingleShot);
    assert_eq!(err.iteration, None);
    assert_eq!(planner.draft_calls.load(Ordering::SeqCst), 0);
}

/// A planner returning a plan outside the 5-8 area bound is a schema
/// violation in the planning phase.
#[tokio::test]
async fn structurally_invalid_plan_aborts_the_run() {
    let capabilities = CapabilitySet {
        planner: Arc::new(BrokenPlanner),
        researcher: Arc::new(StubResearcher::new()),
        evaluator: Arc::new(ScriptedEvaluator::new(vec![])),
        single_shot: Arc::new(StubSingleShot),
        comparator: Arc::new(StubComparator::new()),
        fact_checker: Arc::new(VerifyAllChecker::new()),
        reviewer: Arc::new(ScriptedReviewer::accepting()),
    };

    let err = RunOrchestrator::new(capabilities)
        .execute("theme", 3)
        .await
        .unwrap_err();

    assert_eq!(err.phase, RunPhase::Planning);
    assert!(matches!(err.source, ProviderError::SchemaViolation(_)));
}
