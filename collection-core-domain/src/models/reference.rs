use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// Reference data consumed read-only by this core (pickers and labels).
/// These collections are never mutated here.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryModel {
    pub id: i64,
    pub name: HeaplessString<100>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionModel {
    pub id: i64,
    pub name: HeaplessString<100>,
    #[serde(default)]
    pub country_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchaeologicalSiteModel {
    pub id: i64,
    pub name: HeaplessString<200>,
    #[serde(default)]
    pub region_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalClassifierModel {
    pub id: i64,
    pub name: HeaplessString<100>,
}

impl Identifiable for CountryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for RegionModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for ArchaeologicalSiteModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for InternalClassifierModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
