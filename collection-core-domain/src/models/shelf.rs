use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec;
use crate::models::identifiable::Identifiable;

/// A physical storage unit, identified by its linear code (1-30).
///
/// The code is immutable once assigned; labels are derived from it by the
/// codec and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfModel {
    pub id: i64,

    /// Linear storage code, 1..=30.
    pub code: i32,

    #[serde(default)]
    pub observations: Option<HeaplessString<200>>,
}

impl ShelfModel {
    /// Full human label, e.g. "Estante B3" or "Mesa MT-1".
    pub fn label(&self) -> String {
        codec::label_for_shelf_code(self.code)
    }

    /// Label without the "Estante "/"Mesa " prefix.
    pub fn short_label(&self) -> String {
        codec::short_label(self.code)
    }

    pub fn is_work_table(&self) -> bool {
        codec::is_work_table(self.code)
    }
}

impl Identifiable for ShelfModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Create payload for a shelf.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShelfDraft {
    #[validate(range(min = 1, max = 30, message = "shelf code must be between 1 and 30"))]
    pub code: i32,

    #[serde(default)]
    pub observations: Option<HeaplessString<200>>,
}
