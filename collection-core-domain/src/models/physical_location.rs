use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::models::identifiable::Identifiable;

/// A concrete storage slot: one shelf, one level, one column.
///
/// Identity is the `(shelfId, level, column)` tuple; the backend assigns
/// the surrogate id on first reference and the row is never edited or
/// deleted by this client afterwards. Column text is kept as received so a
/// malformed cell degrades in dimension inference instead of failing
/// decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocationModel {
    pub id: i64,

    pub shelf_id: i64,

    /// 1-based on well-formed rows.
    pub level: i32,

    /// Single uppercase letter on well-formed rows.
    pub column: HeaplessString<8>,
}

impl PhysicalLocationModel {
    /// Exact natural-key match against a picker selection.
    pub fn matches(&self, shelf_id: i64, level: i32, column: char) -> bool {
        self.shelf_id == shelf_id
            && self.level == level
            && self.column.len() == 1
            && self.column.as_str().as_bytes()[0] == column as u8
    }

    /// 1-based column ordinal, defaulting malformed text to 1.
    pub fn column_ordinal(&self) -> u32 {
        codec::column_ordinal(self.column.as_str())
    }
}

impl Identifiable for PhysicalLocationModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
