use std::collections::HashMap;
use std::sync::Arc;

use collection_core_api::{ApiError, ApiResult, QueryState};
use collection_core_domain::codec;
use collection_core_domain::models::{NewPhysicalLocation, PhysicalLocationModel, ShelfModel};
use collection_core_domain::models::requests::validate_payload;
use parking_lot::Mutex;
use tracing::debug;

use super::repo_impl::LocationRepositoryImpl;
use crate::cache::{CollectionTag, Mutation};

type SlotKey = (i64, i32, char);

/// One async mutex per `(shelf, level, column)` under creation.
///
/// Concurrent resolvers of the same missing slot serialize here: the
/// winner issues the create, the waiters re-check the refreshed list and
/// find the row, so the backend sees exactly one POST per slot.
pub(super) struct CreationLocks {
    inner: Mutex<HashMap<SlotKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl CreationLocks {
    pub(super) fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    fn for_slot(&self, key: SlotKey) -> Arc<tokio::sync::Mutex<()>> {
        self.inner.lock().entry(key).or_default().clone()
    }
}

impl LocationRepositoryImpl {
    /// Find-or-create for one slot.
    ///
    /// The cached list is searched first; only a miss goes to the backend,
    /// guarded by the per-slot lock. Lock holders re-check after acquiring
    /// because another resolver may have created the row while they
    /// waited.
    pub async fn resolve(&self, shelf_id: i64, level: i32, column: char) -> ApiResult<i64> {
        if let Some(id) = self.lookup(shelf_id, level, column).await? {
            return Ok(id);
        }

        let lock = self.creation_locks.for_slot((shelf_id, level, column));
        let _guard = lock.lock().await;

        if let Some(id) = self.lookup(shelf_id, level, column).await? {
            return Ok(id);
        }

        let payload = NewPhysicalLocation {
            level,
            column,
            shelf_id,
        };
        validate_payload(&payload)?;
        let created: PhysicalLocationModel = self
            .client
            .post_as(CollectionTag::PhysicalLocations.path(), &payload)
            .await?;
        debug!(shelf_id, level, %column, id = created.id, "created physical location");
        self.cache
            .apply_mutation(Mutation::LocationCreated, Some(created.id))
            .await;
        Ok(created.id)
    }

    /// Resolves a picker selection for a shelf. Work tables bypass the
    /// grid and always land on level 1, column A; every other shelf needs
    /// an explicit slot.
    pub async fn resolve_selection(
        &self,
        shelf: &ShelfModel,
        slot: Option<(i32, u32)>,
    ) -> ApiResult<i64> {
        if shelf.is_work_table() {
            return self.resolve(shelf.id, 1, 'A').await;
        }
        let (level_index, column_index) = slot.ok_or_else(|| {
            ApiError::Validation("a level and column selection is required".to_string())
        })?;
        self.resolve(
            shelf.id,
            codec::ui_index_to_level(level_index),
            codec::column_index_to_letter(column_index),
        )
        .await
    }

    async fn lookup(&self, shelf_id: i64, level: i32, column: char) -> ApiResult<Option<i64>> {
        match self.cached_list().await? {
            // resolve runs inside mutation flows; without a token the
            // backend would refuse the create anyway
            QueryState::Disabled => Err(ApiError::Unauthorized),
            QueryState::Ready(rows) => Ok(rows
                .iter()
                .find(|row| row.matches(shelf_id, level, column))
                .map(|row| row.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_repositories;
    use crate::transport::Method;
    use collection_core_api::{ApiError, ApiResult};
    use collection_core_domain::models::ShelfModel;
    use serde_json::json;

    fn shelf(id: i64, code: i32) -> ShelfModel {
        ShelfModel {
            id,
            code,
            observations: None,
        }
    }

    #[tokio::test]
    async fn existing_slot_resolves_without_a_create_call() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();
        backend.seed(
            "physical-locations",
            vec![json!({ "id": 31, "shelfId": 7, "level": 2, "column": "B" })],
        );

        let id = repos.location_repository.resolve(7, 2, 'B').await?;
        assert_eq!(id, 31);
        assert_eq!(backend.count_calls(Method::Post, "physical-locations"), 0);

        Ok(())
    }

    #[tokio::test]
    async fn find_or_create_is_idempotent_across_sequential_calls() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();

        let first = repos.location_repository.resolve(7, 3, 'C').await?;
        let second = repos.location_repository.resolve(7, 3, 'C').await?;

        assert_eq!(first, second);
        assert_eq!(backend.count_calls(Method::Post, "physical-locations"), 1);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_resolvers_share_one_create() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();
        let repo = &repos.location_repository;

        let (a, b) = tokio::join!(repo.resolve(7, 1, 'A'), repo.resolve(7, 1, 'A'));
        assert_eq!(a?, b?);
        assert_eq!(backend.count_calls(Method::Post, "physical-locations"), 1);

        Ok(())
    }

    #[tokio::test]
    async fn distinct_slots_create_distinct_rows() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();

        let a = repos.location_repository.resolve(7, 1, 'A').await?;
        let b = repos.location_repository.resolve(7, 1, 'B').await?;
        assert_ne!(a, b);
        assert_eq!(backend.count_calls(Method::Post, "physical-locations"), 2);

        Ok(())
    }

    #[tokio::test]
    async fn work_table_selection_short_circuits_to_level_one_column_a() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();

        let id = repos
            .location_repository
            .resolve_selection(&shelf(9, 28), None)
            .await?;

        let rows = backend.rows("physical-locations");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"].as_i64(), Some(id));
        assert_eq!(rows[0]["level"], 1);
        assert_eq!(rows[0]["column"], "A");
        assert_eq!(rows[0]["shelfId"], 9);

        Ok(())
    }

    #[tokio::test]
    async fn regular_shelf_requires_a_slot_selection() {
        let (_backend, repos) = setup_repositories();

        let result = repos
            .location_repository
            .resolve_selection(&shelf(7, 3), None)
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn slot_indices_translate_through_the_codec() -> ApiResult<()> {
        let (backend, repos) = setup_repositories();

        repos
            .location_repository
            .resolve_selection(&shelf(7, 3), Some((2, 3)))
            .await?;

        let rows = backend.rows("physical-locations");
        assert_eq!(rows[0]["level"], 3);
        assert_eq!(rows[0]["column"], "D");

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_level_is_rejected_client_side() {
        let (backend, repos) = setup_repositories();

        let result = repos.location_repository.resolve(7, 0, 'A').await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(backend.count_calls(Method::Post, "physical-locations"), 0);
    }
}
