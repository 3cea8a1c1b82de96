use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// Catalogued artefact, consumed by reference.
///
/// The `physical_location_id` pointer is denormalized "where is it now"
/// state maintained server-side; movement and loan mutations change it, so
/// the artefacts collection is invalidated after those mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtefactModel {
    pub id: i64,

    pub name: HeaplessString<200>,

    #[serde(default)]
    pub physical_location_id: Option<i64>,

    #[serde(default)]
    pub collection_id: Option<i64>,

    #[serde(default)]
    pub archaeologist_id: Option<i64>,

    #[serde(default)]
    pub archaeological_site_id: Option<i64>,

    #[serde(default)]
    pub internal_classifier_id: Option<i64>,
}

impl Identifiable for ArtefactModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
