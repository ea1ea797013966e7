//! Single-shot searcher port.

use async_trait::async_trait;

use crate::domain::errors::ProviderResult;
use crate::domain::models::SimpleSearchResult;

/// Capability that answers a theme with one broad search pass.
#[async_trait]
pub trait SingleShotSearcher: Send + Sync {
    async fn search(&self, theme: &str) -> ProviderResult<SimpleSearchResult>;
}
