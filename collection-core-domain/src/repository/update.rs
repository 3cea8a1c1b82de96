use async_trait::async_trait;
use collection_core_api::ApiResult;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating one entity.
///
/// Updates always carry the full record (PUT semantics); callers must pass
/// the existing record with only the intended fields changed, never a
/// partial patch.
#[async_trait]
pub trait Update<T: Identifiable>: Send + Sync {
    async fn update(&self, item: T) -> ApiResult<T>;
}
