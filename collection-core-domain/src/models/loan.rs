use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::lifecycle::{Lifecycle, LifecycleAware};
use crate::models::timestamp::OffsetTimestamp;

/// Custody of one artefact handed to an external requester.
///
/// Same active/finished convention as movements (null return time means
/// active), independent table, no location involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanModel {
    pub id: i64,

    pub artefact_id: i64,

    pub requester_id: i64,

    pub loan_date: NaiveDate,

    pub loan_time: OffsetTimestamp,

    #[serde(default)]
    pub return_date: Option<NaiveDate>,

    #[serde(default)]
    pub return_time: Option<OffsetTimestamp>,

    #[serde(default)]
    pub observations: Option<HeaplessString<500>>,
}

impl LoanModel {
    /// Full-record finish payload, preserving every other field verbatim.
    pub fn finished(mut self, return_date: NaiveDate, return_time: OffsetTimestamp) -> Self {
        self.return_date = Some(return_date);
        self.return_time = Some(return_time);
        self
    }
}

impl Identifiable for LoanModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl LifecycleAware for LoanModel {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_return_time(self.return_time.as_ref())
    }

    fn effective_time(&self) -> &OffsetTimestamp {
        &self.loan_time
    }
}

/// Create payload for a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDraft {
    pub artefact_id: i64,

    pub requester_id: i64,

    pub loan_date: NaiveDate,

    pub loan_time: OffsetTimestamp,

    #[serde(default)]
    pub observations: Option<HeaplessString<500>>,
}
