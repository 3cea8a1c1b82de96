use async_trait::async_trait;
use collection_core_api::{ApiResult, QueryState};

/// Generic repository trait for listing a backend collection.
///
/// List reads go through the shared query cache and are token-gated:
/// without a stored auth token the read is not issued and the caller
/// receives `QueryState::Disabled`.
#[async_trait]
pub trait List<T>: Send + Sync {
    /// Full collection, possibly served from the staleness window.
    async fn list(&self) -> ApiResult<QueryState<Vec<T>>>;
}
