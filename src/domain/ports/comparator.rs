//! Comparator port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::{
    ComparisonNarrative, EvaluationResult, ResearchResult, SimpleSearchResult,
};

/// Capability that writes the qualitative half of the comparison:
/// differences, strengths and weaknesses, recommendation, and the
/// cost-effectiveness analysis. The quantitative half comes from the
/// aggregator, not from this provider.
#[async_trait]
pub trait Comparator: Send + Sync {
    async fn compare(
        &self,
        simple: &SimpleSearchResult,
        agentic: &ResearchResult,
        history: &[EvaluationResult],
    ) -> ProviderResult<ComparisonNarrative>;
}
