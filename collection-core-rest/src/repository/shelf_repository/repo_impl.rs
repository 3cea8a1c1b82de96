use std::sync::Arc;

use async_trait::async_trait;
use collection_core_api::{ApiResult, QueryState};
use collection_core_domain::models::requests::validate_payload;
use collection_core_domain::models::{ShelfDraft, ShelfModel};
use collection_core_domain::repository::{Create, FindById, List, Update};

use crate::cache::{CollectionTag, Mutation, QueryCache, QueryKey};
use crate::client::RestClient;

/// Storage units. Codes are assigned once and never reassigned; the
/// labels screens display come from the codec, derived from the code.
pub struct ShelfRepositoryImpl {
    client: Arc<RestClient>,
    cache: Arc<QueryCache>,
}

impl ShelfRepositoryImpl {
    pub fn new(client: Arc<RestClient>, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    async fn cached_list(&self) -> ApiResult<QueryState<Arc<Vec<ShelfModel>>>> {
        let client = self.client.clone();
        self.cache
            .get_or_load(QueryKey::collection(CollectionTag::Shelfs), async move {
                client.get_as::<Vec<ShelfModel>>(CollectionTag::Shelfs.path()).await
            })
            .await
    }
}

#[async_trait]
impl List<ShelfModel> for ShelfRepositoryImpl {
    async fn list(&self) -> ApiResult<QueryState<Vec<ShelfModel>>> {
        Ok(self.cached_list().await?.map(|rows| rows.as_ref().clone()))
    }
}

#[async_trait]
impl FindById<ShelfModel> for ShelfRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> ApiResult<QueryState<ShelfModel>> {
        let client = self.client.clone();
        let path = format!("shelfs/{id}");
        let state = self
            .cache
            .get_or_load(QueryKey::one(CollectionTag::Shelfs, id), async move {
                client.get_as::<ShelfModel>(&path).await
            })
            .await?;
        Ok(state.map(|row| row.as_ref().clone()))
    }
}

#[async_trait]
impl Create<ShelfDraft, ShelfModel> for ShelfRepositoryImpl {
    async fn create(&self, draft: ShelfDraft) -> ApiResult<ShelfModel> {
        validate_payload(&draft)?;
        let created: ShelfModel = self.client.post_as("shelfs", &draft).await?;
        self.cache
            .apply_mutation(Mutation::ShelfCreated, Some(created.id))
            .await;
        Ok(created)
    }
}

#[async_trait]
impl Update<ShelfModel> for ShelfRepositoryImpl {
    async fn update(&self, shelf: ShelfModel) -> ApiResult<ShelfModel> {
        let path = format!("shelfs/{}", shelf.id);
        let updated: ShelfModel = self.client.put_as(&path, &shelf).await?;
        self.cache
            .apply_mutation(Mutation::ShelfUpdated, Some(shelf.id))
            .await;
        Ok(updated)
    }
}
