//! Research cycle controller.
//!
//! Drives the research -> fact-check -> evaluate -> refine loop up to a
//! bounded iteration count. The iteration ceiling is the only hard
//! cancellation mechanism; a provider failure at any step is fatal to the
//! run and carries the phase and iteration it happened at.
//!
//! ```text
//! Planning -> Researching -> FactChecking -> Evaluating
//!                 ^                              |
//!                 +--------- Refining <----------+--> Stopped
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::{ProviderError, RunError, RunPhase, RunResult};
use crate::domain::models::{
    finding_key, CycleContext, CycleOutcome, Evidence, FactCheckRecord, FactCheckReport, Finding,
    RawIteration, ResearchResult, SearchPlan,
};
use crate::domain::ports::{Evaluator, FactChecker, Researcher};
use crate::services::{gate, merge};

/// Sequences one agentic research phase from a confirmed plan to a
/// terminal result.
pub struct CycleController {
    researcher: Arc<dyn Researcher>,
    evaluator: Arc<dyn Evaluator>,
    fact_checker: Arc<dyn FactChecker>,
}

impl CycleController {
    pub fn new(
        researcher: Arc<dyn Researcher>,
        evaluator: Arc<dyn Evaluator>,
        fact_checker: Arc<dyn FactChecker>,
    ) -> Self {
        Self {
            researcher,
            evaluator,
            fact_checker,
        }
    }

    /// Run the cycle to completion.
    ///
    /// Terminates after at most `max_iterations` rounds, or earlier the
    /// first time the gate accepts an evaluation. The terminal result is
    /// the last iteration's output with its findings and evidence replaced
    /// by the accumulated verified-only sets.
    pub async fn run(
        &self,
        theme: &str,
        initial_plan: SearchPlan,
        max_iterations: u32,
    ) -> RunResult<CycleOutcome> {
        // A ceiling of zero would never research anything; one round is
        // the minimum meaningful cycle.
        let max_iterations = max_iterations.max(1);

        let mut plan = initial_plan;
        let mut context = CycleContext::default();
        let mut evaluations = Vec::new();
        let mut raw_iterations = Vec::new();

        for iteration in 1..=max_iterations {
            info!(iteration, max_iterations, "research iteration starting");

            let result = self
                .researcher
                .research(theme, &plan, iteration, &context)
                .await
                .map_err(|e| RunError::during(RunPhase::Researching, Some(iteration), e))?;
            if result.iteration_number != iteration {
                return Err(RunError::during(
                    RunPhase::Researching,
                    Some(iteration),
                    ProviderError::SchemaViolation(format!(
                        "researcher returned iteration {} while running iteration {iteration}",
                        result.iteration_number
                    )),
                ));
            }
            raw_iterations.push(RawIteration::from_result(&result));
            debug!(
                iteration,
                findings = result.findings.len(),
                evidence = result.evidence.len(),
                "research iteration complete"
            );

            self.verify_iteration(iteration, &result, &mut context)
                .await?;

            let assessment = self
                .evaluator
                .assess(&result, &context)
                .await
                .map_err(|e| RunError::during(RunPhase::Evaluating, Some(iteration), e))?;
            assessment
                .scores
                .validate()
                .map_err(|e| RunError::during(RunPhase::Evaluating, Some(iteration), e))?;
            if let Some(refined) = &assessment.refined_plan {
                refined
                    .validate()
                    .map_err(|e| RunError::during(RunPhase::Evaluating, Some(iteration), e))?;
            }

            let evaluation = gate::seal_assessment(iteration, assessment);
            info!(
                iteration,
                overall = evaluation.overall_score,
                should_refine = evaluation.should_refine,
                "evaluation sealed"
            );

            context.latest_gaps = evaluation.coverage_gaps.clone();
            context.latest_strategy = evaluation.refinement_strategy.clone();
            context.previous_overall = Some(evaluation.overall_score);
            context.previous_credibility = Some(evaluation.scores.credibility);

            let refined_plan = evaluation.refined_plan.clone();
            let should_refine = evaluation.should_refine;
            evaluations.push(evaluation);

            if !should_refine || iteration == max_iterations {
                if should_refine {
                    info!(iteration, "iteration ceiling reached, stopping");
                } else {
                    info!(iteration, "quality gate passed, stopping");
                }

                let mut final_result = result;
                final_result.findings = context.accepted_findings.clone();
                final_result.evidence = context.accepted_evidence.clone();

                return Ok(CycleOutcome {
                    final_plan: plan,
                    final_result,
                    evaluations,
                    fact_checks: context.fact_check_history,
                    raw_iterations,
                });
            }

            debug!(iteration, "refining plan for next iteration");
            plan = merge::merge(&plan, refined_plan.as_ref());
        }

        // The loop always returns on the iteration == max_iterations round.
        unreachable!("cycle loop exited without producing a terminal result")
    }

    /// Fact-check one iteration's output and fold the verified subset into
    /// the accumulated context. An iteration with nothing to check is
    /// recorded as skipped.
    async fn verify_iteration(
        &self,
        iteration: u32,
        result: &ResearchResult,
        context: &mut CycleContext,
    ) -> RunResult<()> {
        if result.findings.is_empty() && result.evidence.is_empty() {
            debug!(iteration, "nothing to fact-check, skipping");
            context
                .fact_check_history
                .push(FactCheckRecord::skipped(iteration));
            return Ok(());
        }

        let report = self
            .fact_checker
            .verify(result)
            .await
            .map_err(|e| RunError::during(RunPhase::FactChecking, Some(iteration), e))?;
        report
            .validate()
            .map_err(|e| RunError::during(RunPhase::FactChecking, Some(iteration), e))?;

        let (accepted_findings, accepted_evidence) = accepted_subset(result, &report);
        info!(
            iteration,
            verified = report.total_verified,
            removed = report.total_removed,
            accepted_findings = accepted_findings.len(),
            accepted_evidence = accepted_evidence.len(),
            "fact-check complete"
        );

        context.absorb_findings(accepted_findings);
        context.absorb_evidence(accepted_evidence);
        context
            .fact_check_history
            .push(FactCheckRecord::from_report(iteration, &report));
        Ok(())
    }
}

/// Select the researcher's original findings and evidence that passed the
/// check. The originals are used, never the checker's rewrites, so URLs
/// reach the report exactly as retrieved.
fn accepted_subset(
    result: &ResearchResult,
    report: &FactCheckReport,
) -> (Vec<Finding>, Vec<Evidence>) {
    let verified_contents: BTreeSet<String> = report
        .verified_findings
        .iter()
        .map(|vf| finding_key(&vf.content))
        .collect();

    let mut verified_urls: BTreeSet<&str> = BTreeSet::new();
    for ve in &report.verified_evidence {
        if !ve.original_url.is_empty() {
            verified_urls.insert(ve.original_url.as_str());
        }
        if !ve.url.is_empty() {
            verified_urls.insert(ve.url.as_str());
        }
    }

    let findings = result
        .findings
        .iter()
        .filter(|f| verified_contents.contains(&finding_key(&f.content)))
        .cloned()
        .collect();
    let evidence = result
        .evidence
        .iter()
        .filter(|e| verified_urls.contains(e.url.as_str()))
        .cloned()
        .collect();
    (findings, evidence)
}
