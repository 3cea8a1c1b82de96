use std::sync::Arc;

use async_trait::async_trait;
use collection_core_api::{ApiError, ApiResult, QueryState};
use collection_core_domain::models::LoanModel;
use collection_core_domain::repository::List;

use crate::cache::{CollectionTag, QueryCache, QueryKey};
use crate::client::RestClient;

/// Ledger of external custody.
///
/// Same active/finished convention as internal movements (null return time
/// means the artefact is still out), but scoped to a requester taking one
/// artefact, with no location involved.
pub struct LoanRepositoryImpl {
    pub(super) client: Arc<RestClient>,
    pub(super) cache: Arc<QueryCache>,
}

impl LoanRepositoryImpl {
    pub fn new(client: Arc<RestClient>, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    pub(super) async fn cached_list(&self) -> ApiResult<QueryState<Arc<Vec<LoanModel>>>> {
        let client = self.client.clone();
        self.cache
            .get_or_load(QueryKey::collection(CollectionTag::Loans), async move {
                client.get_as::<Vec<LoanModel>>(CollectionTag::Loans.path()).await
            })
            .await
    }

    /// The single active loan for an artefact, if any; 404 from the
    /// backend means "no active record", not an error.
    pub async fn find_active_by_artefact(&self, artefact_id: i64) -> ApiResult<Option<LoanModel>> {
        let path = format!("loans/artefact/{artefact_id}/active");
        match self.client.get_as(&path).await {
            Ok(loan) => Ok(Some(loan)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl List<LoanModel> for LoanRepositoryImpl {
    async fn list(&self) -> ApiResult<QueryState<Vec<LoanModel>>> {
        Ok(self.cached_list().await?.map(|rows| rows.as_ref().clone()))
    }
}
