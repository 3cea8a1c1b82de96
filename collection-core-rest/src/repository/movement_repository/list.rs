use collection_core_api::{ApiResult, QueryState};
use collection_core_domain::models::{partition_records, InternalMovementModel, PartitionedRecords};

use super::repo_impl::MovementRepositoryImpl;

impl MovementRepositoryImpl {
    /// Movement history as the screens render it: active and finished
    /// groups, each most-recent-first. A malformed timestamp on any row
    /// must not break the render; such rows sort last in their group.
    pub async fn list_partitioned(
        &self,
    ) -> ApiResult<QueryState<PartitionedRecords<InternalMovementModel>>> {
        Ok(self
            .cached_list()
            .await?
            .map(|rows| partition_records(rows.as_ref().clone())))
    }
}
