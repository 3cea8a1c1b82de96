use std::sync::Arc;

use async_trait::async_trait;
use collection_core_api::{ApiResult, QueryState};
use collection_core_domain::models::{PhysicalLocationModel, ShelfDimensions};
use collection_core_domain::repository::List;

use super::resolve::CreationLocks;
use crate::cache::{CollectionTag, QueryCache, QueryKey};
use crate::client::RestClient;

/// Cache-backed store of physical-location rows.
///
/// Rows are created lazily on first reference (see the find-or-create in
/// `resolve.rs`) and never edited or deleted afterwards, so the whole
/// collection is cached as one list and searched locally.
pub struct LocationRepositoryImpl {
    pub(super) client: Arc<RestClient>,
    pub(super) cache: Arc<QueryCache>,
    pub(super) creation_locks: CreationLocks,
}

impl LocationRepositoryImpl {
    pub fn new(client: Arc<RestClient>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            creation_locks: CreationLocks::new(),
        }
    }

    pub(super) async fn cached_list(
        &self,
    ) -> ApiResult<QueryState<Arc<Vec<PhysicalLocationModel>>>> {
        let client = self.client.clone();
        self.cache
            .get_or_load(
                QueryKey::collection(CollectionTag::PhysicalLocations),
                async move {
                    client
                        .get_as::<Vec<PhysicalLocationModel>>(
                            CollectionTag::PhysicalLocations.path(),
                        )
                        .await
                },
            )
            .await
    }

    /// Grid the slot picker should render for one shelf: 4x4 when the
    /// shelf has no rows yet, otherwise the observed maxima.
    pub async fn dimensions_for_shelf(
        &self,
        shelf_id: i64,
    ) -> ApiResult<QueryState<ShelfDimensions>> {
        Ok(self.cached_list().await?.map(|rows| {
            ShelfDimensions::infer(rows.iter().filter(|row| row.shelf_id == shelf_id))
        }))
    }
}

#[async_trait]
impl List<PhysicalLocationModel> for LocationRepositoryImpl {
    async fn list(&self) -> ApiResult<QueryState<Vec<PhysicalLocationModel>>> {
        Ok(self.cached_list().await?.map(|rows| rows.as_ref().clone()))
    }
}
