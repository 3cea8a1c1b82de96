use async_trait::async_trait;
use collection_core_api::{ApiResult, QueryState};

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading one entity by surrogate id.
///
/// Cached under the collection tag suffixed with the id; token-gated like
/// every cached read. A missing row surfaces as `ApiError::NotFound`.
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    async fn find_by_id(&self, id: i64) -> ApiResult<QueryState<T>>;
}
