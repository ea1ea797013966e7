//! Evaluator port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::{Assessment, CycleContext, ResearchResult};

/// Capability that judges a research result on the six axes.
///
/// Returns a raw [`Assessment`]; the overall score and the refine decision
/// are derived by the gate, never by the provider. All six axis scores
/// must be populated in 0..=10 or the caller rejects the assessment as a
/// schema violation.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn assess(
        &self,
        result: &ResearchResult,
        context: &CycleContext,
    ) -> ProviderResult<Assessment>;
}
