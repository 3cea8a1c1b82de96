use collection_core_api::{ApiError, ApiResult};
use collection_core_domain::models::{local_now_pair, InternalMovementModel, LifecycleAware};
use tracing::debug;

use super::repo_impl::MovementRepositoryImpl;
use crate::cache::Mutation;

impl MovementRepositoryImpl {
    /// Closes out an active movement by stamping the return date and time.
    ///
    /// The record is fetched fresh from the backend and sent back in full
    /// with only the two return fields added, so nothing else can be
    /// cleared by the update.
    pub async fn finish(&self, id: i64) -> ApiResult<InternalMovementModel> {
        let existing: InternalMovementModel = self
            .client
            .get_as(&format!("internal-movements/{id}"))
            .await?;
        if !existing.lifecycle().is_active() {
            return Err(ApiError::Validation(format!(
                "movement {id} is already finished"
            )));
        }

        let (return_date, return_time) = local_now_pair();
        let payload = existing.finished(return_date, return_time);
        let updated: InternalMovementModel = self
            .client
            .put_as(&format!("internal-movements/{id}"), &payload)
            .await?;

        debug!(id, "finished internal movement");
        self.cache
            .apply_mutation(Mutation::MovementFinished, Some(id))
            .await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_repositories;
    use collection_core_api::{ApiError, ApiResult};
    use collection_core_domain::models::{LifecycleAware, NewMovement};

    #[tokio::test]
    async fn finish_stamps_return_fields_and_preserves_the_rest() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();
        let created = repos
            .movement_repository
            .create(NewMovement {
                artefact_ids: vec![5],
                to_physical_location_id: 42,
                requester_id: Some(9),
                reason: None,
                observations: None,
            })
            .await?;
        let id = created[0].id;

        let finished = repos.movement_repository.finish(id).await?;
        assert!(!finished.lifecycle().is_active());
        assert!(finished.return_time.is_some());

        let row = &backend.rows("internal-movements")[0];
        assert_eq!(row["artefactId"], 5);
        assert_eq!(row["toPhysicalLocationId"], 42);
        assert_eq!(row["requesterId"], 9);
        assert!(!row["returnTime"].is_null());
        assert!(!row["returnDate"].is_null());

        Ok(())
    }

    #[tokio::test]
    async fn finishing_twice_is_a_validation_error() -> ApiResult<()> {
        let (_backend, repos) = setup_repositories();
        let created = repos
            .movement_repository
            .create(NewMovement {
                artefact_ids: vec![5],
                to_physical_location_id: 42,
                requester_id: None,
                reason: None,
                observations: None,
            })
            .await?;
        let id = created[0].id;

        repos.movement_repository.finish(id).await?;
        let second = repos.movement_repository.finish(id).await;
        assert!(matches!(second, Err(ApiError::Validation(_))));

        Ok(())
    }

    #[tokio::test]
    async fn finishing_a_missing_movement_propagates_not_found() {
        let (_backend, repos) = setup_repositories();
        let result = repos.movement_repository.finish(999).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
