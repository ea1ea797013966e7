//! Console adapter for the human plan-review checkpoint.

use async_trait::async_trait;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::models::SearchPlan;
use crate::domain::ports::{PlanReview, PlanReviewer};

/// Presents the initial plan on the terminal and blocks on one line of
/// operator input. Empty input or EOF accepts the plan; anything else is
/// taken as revision instructions.
pub struct ConsolePlanReviewer;

#[async_trait]
impl PlanReviewer for ConsolePlanReviewer {
    async fn review(&self, plan: &SearchPlan) -> ProviderResult<PlanReview> {
        println!("{}", render_plan(plan));
        println!(
            "{}",
            style(
                "Press Enter to start with this plan, or type revision \
                 instructions first."
            )
            .dim()
        );

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        reader
            .read_line(&mut line)
            .await
            .map_err(|e| ProviderError::Capability(format!("failed to read operator input: {e}")))?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            Ok(PlanReview::Accept)
        } else {
            Ok(PlanReview::Revise(trimmed.to_string()))
        }
    }
}

/// Auto-accepting reviewer for unattended (`--yes` / batch) runs.
pub struct AutoAcceptReviewer;

#[async_trait]
impl PlanReviewer for AutoAcceptReviewer {
    async fn review(&self, _plan: &SearchPlan) -> ProviderResult<PlanReview> {
        Ok(PlanReview::Accept)
    }
}

/// Human-readable rendering of a plan for the confirmation screen.
pub fn render_plan(plan: &SearchPlan) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Proposed research plan").bold());
    let _ = writeln!(out, "\nObjective:\n  {}", plan.objective);
    let _ = writeln!(out, "\nResearch areas ({}):", plan.research_areas.len());
    for (i, area) in plan.research_areas.iter().enumerate() {
        let _ = writeln!(out, "  {}. {area}", i + 1);
        let keywords = plan.keywords_for(area);
        if !keywords.is_empty() {
            let _ = writeln!(out, "     keywords: {}", keywords.join(", "));
        }
    }
    let _ = writeln!(out, "\nPriority order:");
    for (i, area) in plan.priority_order.iter().enumerate() {
        let _ = writeln!(out, "  {}. {area}", i + 1);
    }
    let _ = writeln!(out, "\nStrategy:\n  {}", plan.research_strategy);
    if !plan.expected_outcomes.is_empty() {
        let _ = writeln!(out, "\nExpected outcomes:");
        for (i, outcome) in plan.expected_outcomes.iter().enumerate() {
            let _ = writeln!(out, "  {}. {outcome}", i + 1);
        }
    }
    out
}
