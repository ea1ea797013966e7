//! Run orchestrator: the root sequencer for one comparison run.
//!
//! Three phases run strictly in order: the one-shot search, the agentic
//! research cycle (entered through the human plan-review checkpoint), and
//! the comparison. The checkpoint is the run's single suspension point;
//! everything else is one blocking capability call after another. Any
//! capability failure aborts the whole run.

use std::sync::Arc;

use tracing::info;

use crate::application::cycle::CycleController;
use crate::domain::errors::{ProviderError, RunError, RunPhase, RunResult};
use crate::domain::models::{AxisScores, CycleContext, RunOutcome, SearchPlan, SimpleSearchResult};
use crate::domain::ports::{
    Comparator, Evaluator, FactChecker, PlanReview, PlanReviewer, PlanRevision, Planner,
    Researcher, SingleShotSearcher,
};
use crate::services::aggregate;

/// The full set of capability providers a run needs.
#[derive(Clone)]
pub struct CapabilitySet {
    pub planner: Arc<dyn Planner>,
    pub researcher: Arc<dyn Researcher>,
    pub evaluator: Arc<dyn Evaluator>,
    pub single_shot: Arc<dyn SingleShotSearcher>,
    pub comparator: Arc<dyn Comparator>,
    pub fact_checker: Arc<dyn FactChecker>,
    pub reviewer: Arc<dyn PlanReviewer>,
}

/// Owns the theme and both terminal results for the lifetime of a run.
/// All run state is carried here and in locals; nothing is module-global,
/// so concurrent runs stay fully isolated.
pub struct RunOrchestrator {
    capabilities: CapabilitySet,
}

impl RunOrchestrator {
    pub fn new(capabilities: CapabilitySet) -> Self {
        Self { capabilities }
    }

    /// Execute one full comparison run for a theme.
    pub async fn execute(&self, theme: &str, max_iterations: u32) -> RunResult<RunOutcome> {
        let caps = &self.capabilities;

        info!(theme, "one-shot search phase starting");
        let simple_result = caps
            .single_shot
            .search(theme)
            .await
            .map_err(|e| RunError::during(RunPhase::SingleShot, None, e))?;
        info!(
            findings = simple_result.findings.len(),
            evidence = simple_result.evidence.len(),
            "one-shot search complete"
        );

        let plan = self.confirmed_plan(theme).await?;

        info!(
            areas = plan.research_areas.len(),
            max_iterations, "research cycle phase starting"
        );
        let cycle = CycleController::new(
            Arc::clone(&caps.researcher),
            Arc::clone(&caps.evaluator),
            Arc::clone(&caps.fact_checker),
        );
        let cycle_outcome = cycle.run(theme, plan, max_iterations).await?;

        let simple_scores = self.score_single_shot(&simple_result).await?;

        info!("comparison phase starting");
        let narrative = caps
            .comparator
            .compare(
                &simple_result,
                &cycle_outcome.final_result,
                &cycle_outcome.evaluations,
            )
            .await
            .map_err(|e| RunError::during(RunPhase::Comparing, None, e))?;

        let agentic_scores = cycle_outcome
            .final_evaluation()
            .map(|evaluation| evaluation.scores)
            .ok_or_else(|| {
                RunError::during(
                    RunPhase::Comparing,
                    None,
                    ProviderError::SchemaViolation("cycle produced no evaluations".into()),
                )
            })?;

        let comparison = aggregate::aggregate(theme, &simple_scores, &agentic_scores, narrative);
        info!(
            simple_total = comparison.simple_total,
            agentic_total = comparison.agentic_total,
            "comparison complete"
        );

        Ok(RunOutcome {
            theme: theme.to_string(),
            simple_result,
            simple_scores,
            final_plan: cycle_outcome.final_plan,
            final_result: cycle_outcome.final_result,
            evaluations: cycle_outcome.evaluations,
            fact_checks: cycle_outcome.fact_checks,
            raw_iterations: cycle_outcome.raw_iterations,
            comparison,
        })
    }

    /// Draft the initial plan, present it to the operator, and apply one
    /// optional revision round. Empty input accepts the plan as-is.
    async fn confirmed_plan(&self, theme: &str) -> RunResult<SearchPlan> {
        let caps = &self.capabilities;

        let plan = caps
            .planner
            .plan(theme, None)
            .await
            .map_err(|e| RunError::during(RunPhase::Planning, None, e))?;
        plan.validate()
            .map_err(|e| RunError::during(RunPhase::Planning, None, e))?;

        let review = caps
            .reviewer
            .review(&plan)
            .await
            .map_err(|e| RunError::during(RunPhase::PlanReview, None, e))?;

        match review {
            PlanReview::Accept => Ok(plan),
            PlanReview::Revise(instructions) => {
                info!("operator requested plan revision");
                let revised = caps
                    .planner
                    .plan(
                        theme,
                        Some(PlanRevision {
                            instructions: &instructions,
                            previous: &plan,
                        }),
                    )
                    .await
                    .map_err(|e| RunError::during(RunPhase::Planning, None, e))?;
                revised
                    .validate()
                    .map_err(|e| RunError::during(RunPhase::Planning, None, e))?;
                Ok(revised)
            }
        }
    }

    /// Score the one-shot result through the evaluator contract.
    ///
    /// The one-shot schema carries no axis scores, so the result is
    /// reshaped into an iteration-0 research result and assessed with an
    /// empty context; only the scores are kept.
    async fn score_single_shot(&self, simple: &SimpleSearchResult) -> RunResult<AxisScores> {
        info!("scoring one-shot result for comparison");
        let assessment = self
            .capabilities
            .evaluator
            .assess(&simple.as_research_result(), &CycleContext::default())
            .await
            .map_err(|e| RunError::during(RunPhase::Scoring, None, e))?;
        assessment
            .scores
            .validate()
            .map_err(|e| RunError::during(RunPhase::Scoring, None, e))?;
        Ok(assessment.scores)
    }
}
