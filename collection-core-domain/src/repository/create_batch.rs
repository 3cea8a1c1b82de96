use async_trait::async_trait;
use collection_core_api::ApiResult;

/// Generic repository trait for creating several entities in one backend
/// call.
///
/// The batch is all-or-nothing from the caller's perspective: either every
/// draft is persisted or the whole call fails with a single error. No
/// partial-success reporting is attempted.
#[async_trait]
pub trait CreateBatch<D, T>: Send + Sync {
    async fn create_batch(&self, drafts: Vec<D>) -> ApiResult<Vec<T>>;
}
