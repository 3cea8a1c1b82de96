use std::sync::Arc;

use async_trait::async_trait;
use collection_core_api::{ApiResult, QueryState};
use collection_core_domain::models::InternalMovementModel;
use collection_core_domain::repository::List;

use crate::cache::{CollectionTag, QueryCache, QueryKey};
use crate::client::RestClient;

/// Ledger of internal relocations.
///
/// One record per artefact per relocation; at most one should be active
/// (no return time) per artefact at any moment. That rule is a business
/// convention, not a visible constraint, so the active lookup is a
/// precondition check and its result is zero-or-one, never trusted as a
/// guarantee.
pub struct MovementRepositoryImpl {
    pub(super) client: Arc<RestClient>,
    pub(super) cache: Arc<QueryCache>,
}

impl MovementRepositoryImpl {
    pub fn new(client: Arc<RestClient>, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    pub(super) async fn cached_list(
        &self,
    ) -> ApiResult<QueryState<Arc<Vec<InternalMovementModel>>>> {
        let client = self.client.clone();
        self.cache
            .get_or_load(
                QueryKey::collection(CollectionTag::InternalMovements),
                async move {
                    client
                        .get_as::<Vec<InternalMovementModel>>(
                            CollectionTag::InternalMovements.path(),
                        )
                        .await
                },
            )
            .await
    }

    /// Full movement history of one artefact, cached under a filter key.
    pub async fn list_by_artefact(
        &self,
        artefact_id: i64,
    ) -> ApiResult<QueryState<Vec<InternalMovementModel>>> {
        let key = QueryKey::filtered(CollectionTag::InternalMovements, &("artefact", artefact_id))?;
        let client = self.client.clone();
        let path = format!("internal-movements/artefact/{artefact_id}");
        let state = self
            .cache
            .get_or_load(key, async move {
                client.get_as::<Vec<InternalMovementModel>>(&path).await
            })
            .await?;
        Ok(state.map(|rows| rows.as_ref().clone()))
    }
}

#[async_trait]
impl List<InternalMovementModel> for MovementRepositoryImpl {
    async fn list(&self) -> ApiResult<QueryState<Vec<InternalMovementModel>>> {
        Ok(self.cached_list().await?.map(|rows| rows.as_ref().clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_repositories;
    use crate::transport::Method;
    use collection_core_api::ApiResult;
    use serde_json::json;

    #[tokio::test]
    async fn history_by_artefact_is_filtered_and_cached() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();
        backend.seed(
            "internal-movements",
            vec![
                json!({
                    "id": 1, "artefactId": 5, "toPhysicalLocationId": 42,
                    "movementDate": "2024-01-10", "movementTime": "2024-01-10T09:00:00-03:00"
                }),
                json!({
                    "id": 2, "artefactId": 6, "toPhysicalLocationId": 42,
                    "movementDate": "2024-01-11", "movementTime": "2024-01-11T09:00:00-03:00"
                }),
            ],
        );

        let history = repos
            .movement_repository
            .list_by_artefact(5)
            .await?
            .ready()
            .expect("token is set");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].artefact_id, 5);

        // second read for the same artefact is served from cache
        repos.movement_repository.list_by_artefact(5).await?;
        assert_eq!(
            backend.count_calls(Method::Get, "internal-movements/artefact/5"),
            1
        );

        Ok(())
    }
}
