//! Fact-checker port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::{FactCheckReport, ResearchResult};

/// Capability that verifies the sources behind a research result.
///
/// Checks every evidence URL for existence and relevance, hunts for
/// substitutes when the original is dead, and sorts findings and evidence
/// into verified and removed sets. The reliability score must land in
/// 0.0..=1.0.
#[async_trait]
pub trait FactChecker: Send + Sync {
    async fn verify(&self, result: &ResearchResult) -> ProviderResult<FactCheckReport>;
}
