use super::CollectionTag;

/// Every mutation this core issues, with its invalidation set spelled out
/// in one place.
///
/// The first tag in each set is the mutation's primary collection; the
/// rest cover denormalized state the backend updates as a side effect
/// (an artefact's current-location pointer moves when a movement or loan
/// is recorded or returned).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    LocationCreated,
    MovementCreated,
    MovementFinished,
    LoanCreated,
    LoanFinished,
    ShelfCreated,
    ShelfUpdated,
}

impl Mutation {
    pub fn affected_tags(&self) -> &'static [CollectionTag] {
        match self {
            Mutation::LocationCreated => &[CollectionTag::PhysicalLocations],
            Mutation::MovementCreated | Mutation::MovementFinished => &[
                CollectionTag::InternalMovements,
                CollectionTag::Artefacts,
            ],
            Mutation::LoanCreated | Mutation::LoanFinished => {
                &[CollectionTag::Loans, CollectionTag::Artefacts]
            }
            Mutation::ShelfCreated | Mutation::ShelfUpdated => &[CollectionTag::Shelfs],
        }
    }
}
