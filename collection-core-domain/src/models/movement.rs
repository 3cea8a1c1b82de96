use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::lifecycle::{Lifecycle, LifecycleAware};
use crate::models::timestamp::OffsetTimestamp;

/// One recorded relocation of an artefact between two physical locations.
///
/// A null return time means the movement is still active. The record is
/// mutated exactly once, to stamp the return; updates always carry the full
/// record so no field is accidentally cleared by a partial payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalMovementModel {
    pub id: i64,

    pub artefact_id: i64,

    /// Left null on create; the server derives it from the artefact's
    /// current location.
    #[serde(default)]
    pub from_physical_location_id: Option<i64>,

    pub to_physical_location_id: i64,

    pub movement_date: NaiveDate,

    pub movement_time: OffsetTimestamp,

    #[serde(default)]
    pub return_date: Option<NaiveDate>,

    #[serde(default)]
    pub return_time: Option<OffsetTimestamp>,

    #[serde(default)]
    pub reason: Option<HeaplessString<200>>,

    #[serde(default)]
    pub observations: Option<HeaplessString<500>>,

    #[serde(default)]
    pub requester_id: Option<i64>,

    /// Correlates movements created together in one batch submission.
    #[serde(default)]
    pub group_movement_id: Option<Uuid>,
}

impl InternalMovementModel {
    /// Full-record finish payload: the existing record verbatim plus the
    /// return stamp.
    pub fn finished(mut self, return_date: NaiveDate, return_time: OffsetTimestamp) -> Self {
        self.return_date = Some(return_date);
        self.return_time = Some(return_time);
        self
    }
}

impl Identifiable for InternalMovementModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl LifecycleAware for InternalMovementModel {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_return_time(self.return_time.as_ref())
    }

    fn effective_time(&self) -> &OffsetTimestamp {
        &self.movement_time
    }
}

/// Create payload for a movement; ids are assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalMovementDraft {
    pub artefact_id: i64,

    /// Always null from this client; see the model field.
    pub from_physical_location_id: Option<i64>,

    pub to_physical_location_id: i64,

    pub movement_date: NaiveDate,

    pub movement_time: OffsetTimestamp,

    #[serde(default)]
    pub reason: Option<HeaplessString<200>>,

    #[serde(default)]
    pub observations: Option<HeaplessString<500>>,

    #[serde(default)]
    pub requester_id: Option<i64>,

    #[serde(default)]
    pub group_movement_id: Option<Uuid>,
}
