use async_trait::async_trait;
use collection_core_api::ApiResult;
use collection_core_domain::models::requests::validate_payload;
use collection_core_domain::models::{local_now_pair, LoanDraft, LoanModel, NewLoan};
use collection_core_domain::repository::Create;
use tracing::debug;

use super::repo_impl::LoanRepositoryImpl;
use crate::cache::Mutation;

#[async_trait]
impl Create<NewLoan, LoanModel> for LoanRepositoryImpl {
    /// Hands one artefact to an external requester, stamping the loan
    /// date and time from the local clock at submission.
    async fn create(&self, request: NewLoan) -> ApiResult<LoanModel> {
        validate_payload(&request)?;

        let (loan_date, loan_time) = local_now_pair();
        let draft = LoanDraft {
            artefact_id: request.artefact_id,
            requester_id: request.requester_id,
            loan_date,
            loan_time,
            observations: request.observations,
        };

        debug!(
            artefact = draft.artefact_id,
            requester = draft.requester_id,
            "recording loan"
        );
        let created: LoanModel = self.client.post_as("loans", &draft).await?;
        self.cache
            .apply_mutation(Mutation::LoanCreated, Some(created.id))
            .await;
        Ok(created)
    }
}
