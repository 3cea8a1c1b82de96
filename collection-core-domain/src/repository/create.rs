use async_trait::async_trait;
use collection_core_api::ApiResult;

/// Generic repository trait for creating one entity.
///
/// # Type Parameters
/// * `D` - The draft/payload type sent to the backend
/// * `T` - The created entity, with backend-assigned fields populated
///
/// Implementations invalidate the affected cache keys before returning, so
/// the next read observes the new row.
#[async_trait]
pub trait Create<D, T>: Send + Sync {
    async fn create(&self, draft: D) -> ApiResult<T>;
}
