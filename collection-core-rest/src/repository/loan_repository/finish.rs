use collection_core_api::{ApiError, ApiResult};
use collection_core_domain::models::{local_now_pair, LifecycleAware, LoanModel};
use tracing::debug;

use super::repo_impl::LoanRepositoryImpl;
use crate::cache::Mutation;

impl LoanRepositoryImpl {
    /// Records the artefact's return, ending the loan.
    ///
    /// Fetches the record fresh and sends it back whole with the return
    /// stamp added; a partial patch could silently clear fields on the
    /// backend.
    pub async fn finish(&self, id: i64) -> ApiResult<LoanModel> {
        let existing: LoanModel = self.client.get_as(&format!("loans/{id}")).await?;
        if !existing.lifecycle().is_active() {
            return Err(ApiError::Validation(format!("loan {id} is already finished")));
        }

        let (return_date, return_time) = local_now_pair();
        let payload = existing.finished(return_date, return_time);
        let updated: LoanModel = self.client.put_as(&format!("loans/{id}"), &payload).await?;

        debug!(id, "finished loan");
        self.cache.apply_mutation(Mutation::LoanFinished, Some(id)).await;
        Ok(updated)
    }
}
