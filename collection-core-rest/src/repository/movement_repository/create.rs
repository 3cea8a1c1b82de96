use async_trait::async_trait;
use collection_core_api::ApiResult;
use collection_core_domain::models::requests::validate_payload;
use collection_core_domain::models::{
    local_now_pair, InternalMovementDraft, InternalMovementModel, NewMovement,
};
use collection_core_domain::repository::CreateBatch;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::MovementRepositoryImpl;
use crate::cache::Mutation;

impl MovementRepositoryImpl {
    /// Records the relocation of one or more artefacts to a single
    /// resolved destination.
    ///
    /// All drafts share the timestamp captured here (local time with
    /// explicit offset) and, when there is more than one artefact, a
    /// generated group id correlating the batch. The origin location is
    /// deliberately left null; the server fills it from each artefact's
    /// current location. One backend call is issued either way, so the
    /// whole submission succeeds or fails as a unit.
    pub async fn create(&self, request: NewMovement) -> ApiResult<Vec<InternalMovementModel>> {
        validate_payload(&request)?;

        let (movement_date, movement_time) = local_now_pair();
        let group_movement_id = (request.artefact_ids.len() > 1).then(Uuid::new_v4);

        let drafts: Vec<InternalMovementDraft> = request
            .artefact_ids
            .iter()
            .map(|&artefact_id| InternalMovementDraft {
                artefact_id,
                from_physical_location_id: None,
                to_physical_location_id: request.to_physical_location_id,
                movement_date,
                movement_time: movement_time.clone(),
                reason: request.reason.clone(),
                observations: request.observations.clone(),
                requester_id: request.requester_id,
                group_movement_id,
            })
            .collect();

        debug!(
            artefacts = drafts.len(),
            destination = request.to_physical_location_id,
            "recording internal movement"
        );

        let created = if drafts.len() == 1 {
            vec![self.client.post_as("internal-movements", &drafts[0]).await?]
        } else {
            self.create_batch(drafts).await?
        };

        self.cache.apply_mutation(Mutation::MovementCreated, None).await;
        Ok(created)
    }
}

#[async_trait]
impl CreateBatch<InternalMovementDraft, InternalMovementModel> for MovementRepositoryImpl {
    async fn create_batch(
        &self,
        drafts: Vec<InternalMovementDraft>,
    ) -> ApiResult<Vec<InternalMovementModel>> {
        self.client.post_as("internal-movements/batch", &drafts).await
    }
}
