//! Planner port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::SearchPlan;

/// Revision input for a plan the operator asked to change.
#[derive(Debug, Clone, Copy)]
pub struct PlanRevision<'a> {
    /// Free-text instructions from the operator.
    pub instructions: &'a str,
    /// The plan being revised.
    pub previous: &'a SearchPlan,
}

/// Capability that authors a structured research plan for a theme.
///
/// With `revision` absent, drafts an initial plan. With `revision` present,
/// reworks the previous plan to honor the operator's instructions. Either
/// way the returned plan must satisfy [`SearchPlan::validate`]; callers
/// reject anything else as a schema violation.
#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(
        &self,
        theme: &str,
        revision: Option<PlanRevision<'_>>,
    ) -> ProviderResult<SearchPlan>;
}
