use collection_core_api::{ApiError, ApiResult};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User-facing submission payloads, validated before any network call.
/// A failed validation blocks the submission entirely.

/// Relocation of one or more artefacts to a single resolved destination.
#[derive(Debug, Clone, Validate)]
pub struct NewMovement {
    #[validate(length(min = 1, message = "at least one artefact must be selected"))]
    pub artefact_ids: Vec<i64>,

    #[validate(range(min = 1, message = "a destination location must be selected"))]
    pub to_physical_location_id: i64,

    pub requester_id: Option<i64>,

    pub reason: Option<HeaplessString<200>>,

    pub observations: Option<HeaplessString<500>>,
}

/// Loan of exactly one artefact to an external requester.
#[derive(Debug, Clone, Validate)]
pub struct NewLoan {
    #[validate(range(min = 1, message = "an artefact must be selected"))]
    pub artefact_id: i64,

    #[validate(range(min = 1, message = "a requester must be selected"))]
    pub requester_id: i64,

    pub observations: Option<HeaplessString<500>>,
}

/// Backend create payload for a physical location.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPhysicalLocation {
    // the grid can grow past the 4x4 default, so only positivity is
    // checked here
    #[validate(range(min = 1, message = "level must be at least 1"))]
    pub level: i32,

    /// Single uppercase letter.
    pub column: char,

    pub shelf_id: i64,
}

/// Runs validator checks and folds failures into the client-side
/// validation error surface.
pub fn validate_payload<T: Validate>(payload: &T) -> ApiResult<()> {
    payload
        .validate()
        .map_err(|errors| ApiError::Validation(errors.to_string()))
}
