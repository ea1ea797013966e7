//! Human plan-review checkpoint port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::SearchPlan;

/// The operator's verdict on the initial plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanReview {
    /// Proceed with the plan as presented.
    Accept,
    /// Rework the plan per these instructions before proceeding.
    Revise(String),
}

/// The single suspension point of a run: present the initial plan to the
/// operator and block, without polling, until one line of input arrives.
/// Empty input or EOF means acceptance.
#[async_trait]
pub trait PlanReviewer: Send + Sync {
    async fn review(&self, plan: &SearchPlan) -> ProviderResult<PlanReview>;
}
