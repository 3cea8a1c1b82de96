pub mod invalidation;

pub use invalidation::Mutation;

use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use collection_core_api::{ApiError, ApiResult, QueryState};
use collection_core_domain::utils::hash_as_i64;
use moka::future::Cache;
use serde::Serialize;
use tracing::{debug, warn};

use crate::session::AuthSession;

/// Logical collection a cache entry belongs to; one tag per backend
/// resource plus the auth key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionTag {
    Artefacts,
    PhysicalLocations,
    InternalMovements,
    Loans,
    Shelfs,
    Requesters,
    Countries,
    Regions,
    ArchaeologicalSites,
    InternalClassifiers,
    Auth,
}

impl CollectionTag {
    /// Backend path segment for the collection.
    pub fn path(&self) -> &'static str {
        match self {
            CollectionTag::Artefacts => "artefacts",
            CollectionTag::PhysicalLocations => "physical-locations",
            CollectionTag::InternalMovements => "internal-movements",
            CollectionTag::Loans => "loans",
            CollectionTag::Shelfs => "shelfs",
            CollectionTag::Requesters => "requesters",
            CollectionTag::Countries => "countries",
            CollectionTag::Regions => "regions",
            CollectionTag::ArchaeologicalSites => "archaeological-sites",
            CollectionTag::InternalClassifiers => "internal-classifiers",
            CollectionTag::Auth => "auth",
        }
    }
}

/// Cache key taxonomy: collection tag, optional record id, optional stable
/// hash of a filter object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub tag: CollectionTag,
    pub id: Option<i64>,
    pub filter_hash: Option<i64>,
}

impl QueryKey {
    pub fn collection(tag: CollectionTag) -> Self {
        Self {
            tag,
            id: None,
            filter_hash: None,
        }
    }

    pub fn one(tag: CollectionTag, id: i64) -> Self {
        Self {
            tag,
            id: Some(id),
            filter_hash: None,
        }
    }

    pub fn filtered<F: Serialize>(tag: CollectionTag, filter: &F) -> ApiResult<Self> {
        let filter_hash = hash_as_i64(filter).map_err(ApiError::Decode)?;
        Ok(Self {
            tag,
            id: None,
            filter_hash: Some(filter_hash),
        })
    }
}

/// Staleness window for cached reads: a repeat read for the same key
/// inside this window is served from cache. Performance policy only;
/// correctness comes from invalidation.
pub const LIST_STALENESS: Duration = Duration::from_secs(45);

type CachedValue = Arc<dyn Any + Send + Sync>;

/// Process-wide memoization of read results.
///
/// One shared instance backs every repository: identical keys issued
/// concurrently share a single in-flight request, entries age out after
/// [`LIST_STALENESS`], and mutations invalidate by tag through the
/// explicit map in [`invalidation`]. Reads are gated on the auth session.
pub struct QueryCache {
    session: Arc<AuthSession>,
    entries: Cache<QueryKey, CachedValue>,
}

impl QueryCache {
    pub fn new(session: Arc<AuthSession>) -> Self {
        let entries = Cache::builder()
            .time_to_live(LIST_STALENESS)
            .support_invalidation_closures()
            .build();
        Self { session, entries }
    }

    /// Cached read. Returns `Disabled` without touching the backend when no
    /// token is stored; otherwise concurrent callers for the same key share
    /// one execution of `loader`.
    pub async fn get_or_load<T, F>(&self, key: QueryKey, loader: F) -> ApiResult<QueryState<Arc<T>>>
    where
        T: Send + Sync + 'static,
        F: Future<Output = ApiResult<T>> + Send,
    {
        if !self.session.is_authenticated() {
            return Ok(QueryState::Disabled);
        }
        let entry = self
            .entries
            .try_get_with(key, async move {
                loader.await.map(|value| Arc::new(value) as CachedValue)
            })
            .await
            .map_err(|shared: Arc<ApiError>| shared.as_ref().clone())?;
        entry
            .downcast::<T>()
            .map(QueryState::Ready)
            .map_err(|_| ApiError::Decode(format!("cache entry type mismatch for {key:?}")))
    }

    /// Drops every entry under one collection tag.
    pub fn invalidate_tag(&self, tag: CollectionTag) {
        debug!(?tag, "invalidating cache tag");
        if let Err(e) = self.entries.invalidate_entries_if(move |key, _| key.tag == tag) {
            warn!(?tag, error = %e, "cache invalidation predicate rejected");
        }
    }

    /// Drops the id-suffixed entry for one record.
    pub async fn invalidate_id(&self, tag: CollectionTag, id: i64) {
        self.entries.invalidate(&QueryKey::one(tag, id)).await;
    }

    /// Applies a mutation's invalidation set: every affected collection
    /// tag, plus the targeted record key when the mutation had one.
    pub async fn apply_mutation(&self, mutation: Mutation, id: Option<i64>) {
        for &tag in mutation.affected_tags() {
            self.invalidate_tag(tag);
        }
        if let (Some(id), Some(&primary)) = (id, mutation.affected_tags().first()) {
            self.invalidate_id(primary, id).await;
        }
    }
}
