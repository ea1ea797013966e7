//! Researcher port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::{CycleContext, ResearchResult, SearchPlan};

/// Capability that executes one research iteration under a plan.
///
/// The context carries everything previous iterations established:
/// verified findings and evidence to avoid duplicating, the latest
/// coverage gaps to close, and fact-check removal patterns to not repeat.
/// Providers may fan out internally; the core sees one blocking call.
#[async_trait]
pub trait Researcher: Send + Sync {
    async fn research(
        &self,
        theme: &str,
        plan: &SearchPlan,
        iteration: u32,
        context: &CycleContext,
    ) -> ProviderResult<ResearchResult>;
}
