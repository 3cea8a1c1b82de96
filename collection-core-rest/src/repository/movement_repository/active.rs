use collection_core_api::{ApiError, ApiResult};
use collection_core_domain::models::InternalMovementModel;

use super::repo_impl::MovementRepositoryImpl;

impl MovementRepositoryImpl {
    /// The single active movement for an artefact, if any.
    ///
    /// The backend answers 404 when the artefact has no active movement;
    /// that is a defined "no active record" result, not an error. Every
    /// other failure propagates. Used as a precondition check before
    /// recording a new relocation.
    pub async fn find_active_by_artefact(
        &self,
        artefact_id: i64,
    ) -> ApiResult<Option<InternalMovementModel>> {
        let path = format!("internal-movements/artefact/{artefact_id}/active");
        match self.client.get_as(&path).await {
            Ok(movement) => Ok(Some(movement)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_repositories;
    use collection_core_api::ApiResult;
    use collection_core_domain::models::NewMovement;

    fn relocate(artefact_id: i64) -> NewMovement {
        NewMovement {
            artefact_ids: vec![artefact_id],
            to_physical_location_id: 42,
            requester_id: None,
            reason: None,
            observations: None,
        }
    }

    #[tokio::test]
    async fn active_lookup_tracks_the_movement_lifecycle() -> ApiResult<()> {
        let (_backend, repos) = setup_repositories();
        let movements = &repos.movement_repository;

        // nothing recorded yet
        assert!(movements.find_active_by_artefact(5).await?.is_none());

        // create then finish: no active record remains
        let first = movements.create(relocate(5)).await?;
        assert!(movements.find_active_by_artefact(5).await?.is_some());
        movements.finish(first[0].id).await?;
        assert!(movements.find_active_by_artefact(5).await?.is_none());

        // a new movement becomes the active record
        let second = movements.create(relocate(5)).await?;
        let active = movements
            .find_active_by_artefact(5)
            .await?
            .expect("second movement is active");
        assert_eq!(active.id, second[0].id);

        Ok(())
    }
}
