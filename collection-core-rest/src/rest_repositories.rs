use std::sync::Arc;

use collection_core_domain::models::{
    ArchaeologicalSiteModel, ArtefactModel, CountryModel, InternalClassifierModel, RegionModel,
    RequesterModel,
};

use crate::cache::{CollectionTag, QueryCache};
use crate::client::RestClient;
use crate::repository::{
    LoanRepositoryImpl, LocationRepositoryImpl, MovementRepositoryImpl, ReferenceRepository,
    ShelfRepositoryImpl,
};
use crate::session::AuthSession;
use crate::transport::Transport;

/// All repositories wired over one transport, sharing a single session
/// and a single query cache.
///
/// The cache is process-wide by design: a mutation issued from any screen
/// invalidates the keys every other screen reads.
pub struct RestRepositories {
    pub session: Arc<AuthSession>,
    pub cache: Arc<QueryCache>,
    pub shelf_repository: Arc<ShelfRepositoryImpl>,
    pub location_repository: Arc<LocationRepositoryImpl>,
    pub movement_repository: Arc<MovementRepositoryImpl>,
    pub loan_repository: Arc<LoanRepositoryImpl>,
    pub artefact_repository: Arc<ReferenceRepository<ArtefactModel>>,
    pub requester_repository: Arc<ReferenceRepository<RequesterModel>>,
    pub country_repository: Arc<ReferenceRepository<CountryModel>>,
    pub region_repository: Arc<ReferenceRepository<RegionModel>>,
    pub site_repository: Arc<ReferenceRepository<ArchaeologicalSiteModel>>,
    pub classifier_repository: Arc<ReferenceRepository<InternalClassifierModel>>,
}

impl RestRepositories {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let session = Arc::new(AuthSession::new());
        let cache = Arc::new(QueryCache::new(session.clone()));
        let client = Arc::new(RestClient::new(transport, session.clone(), cache.clone()));

        Self {
            shelf_repository: Arc::new(ShelfRepositoryImpl::new(client.clone(), cache.clone())),
            location_repository: Arc::new(LocationRepositoryImpl::new(
                client.clone(),
                cache.clone(),
            )),
            movement_repository: Arc::new(MovementRepositoryImpl::new(
                client.clone(),
                cache.clone(),
            )),
            loan_repository: Arc::new(LoanRepositoryImpl::new(client.clone(), cache.clone())),
            artefact_repository: Arc::new(ReferenceRepository::new(
                client.clone(),
                cache.clone(),
                CollectionTag::Artefacts,
            )),
            requester_repository: Arc::new(ReferenceRepository::new(
                client.clone(),
                cache.clone(),
                CollectionTag::Requesters,
            )),
            country_repository: Arc::new(ReferenceRepository::new(
                client.clone(),
                cache.clone(),
                CollectionTag::Countries,
            )),
            region_repository: Arc::new(ReferenceRepository::new(
                client.clone(),
                cache.clone(),
                CollectionTag::Regions,
            )),
            site_repository: Arc::new(ReferenceRepository::new(
                client.clone(),
                cache.clone(),
                CollectionTag::ArchaeologicalSites,
            )),
            classifier_repository: Arc::new(ReferenceRepository::new(
                client,
                cache.clone(),
                CollectionTag::InternalClassifiers,
            )),
            session,
            cache,
        }
    }
}
