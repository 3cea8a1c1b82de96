use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use collection_core_api::{ApiResult, QueryState};
use collection_core_domain::models::Identifiable;
use collection_core_domain::repository::{FindById, List};
use serde::de::DeserializeOwned;

use crate::cache::{CollectionTag, QueryCache, QueryKey};
use crate::client::RestClient;

/// Read-only repository over one reference collection (artefacts,
/// requesters, countries, regions, sites, classifiers).
///
/// These collections feed pickers and labels; this core never mutates
/// them, so the cached list plus id lookup is the whole surface.
pub struct ReferenceRepository<T> {
    client: Arc<RestClient>,
    cache: Arc<QueryCache>,
    tag: CollectionTag,
    _entity: PhantomData<fn() -> T>,
}

impl<T> ReferenceRepository<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(client: Arc<RestClient>, cache: Arc<QueryCache>, tag: CollectionTag) -> Self {
        Self {
            client,
            cache,
            tag,
            _entity: PhantomData,
        }
    }

    pub fn tag(&self) -> CollectionTag {
        self.tag
    }

    pub(crate) async fn cached_list(&self) -> ApiResult<QueryState<Arc<Vec<T>>>> {
        let client = self.client.clone();
        let path = self.tag.path();
        self.cache
            .get_or_load(QueryKey::collection(self.tag), async move {
                client.get_as::<Vec<T>>(path).await
            })
            .await
    }
}

#[async_trait]
impl<T> List<T> for ReferenceRepository<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn list(&self) -> ApiResult<QueryState<Vec<T>>> {
        Ok(self.cached_list().await?.map(|rows| rows.as_ref().clone()))
    }
}

#[async_trait]
impl<T> FindById<T> for ReferenceRepository<T>
where
    T: Identifiable + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> ApiResult<QueryState<T>> {
        let client = self.client.clone();
        let path = format!("{}/{id}", self.tag.path());
        let state = self
            .cache
            .get_or_load(QueryKey::one(self.tag, id), async move {
                client.get_as::<T>(&path).await
            })
            .await?;
        Ok(state.map(|row| row.as_ref().clone()))
    }
}
