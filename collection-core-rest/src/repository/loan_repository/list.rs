use collection_core_api::{ApiResult, QueryState};
use collection_core_domain::models::{partition_records, LoanModel, PartitionedRecords};

use super::repo_impl::LoanRepositoryImpl;

impl LoanRepositoryImpl {
    /// Loans as the screens render them: active and finished groups, each
    /// most-recent-first by loan time.
    pub async fn list_partitioned(&self) -> ApiResult<QueryState<PartitionedRecords<LoanModel>>> {
        Ok(self
            .cached_list()
            .await?
            .map(|rows| partition_records(rows.as_ref().clone())))
    }
}
