use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Wire format for offset timestamps: local time with an explicit numeric
/// UTC offset, never normalized to `Z`.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// An ISO-8601 timestamp with explicit UTC offset, kept as the exact wire
/// text.
///
/// The backend contract requires offset-preserving round trips, so the raw
/// string is the source of truth and parsing happens lazily where a real
/// `DateTime` is needed (ordering, display). A value that fails to parse is
/// still carried and re-sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetTimestamp(HeaplessString<40>);

impl OffsetTimestamp {
    /// Current local time with the local clock's UTC offset.
    pub fn now_local() -> Self {
        Self::from_datetime(Local::now().fixed_offset())
    }

    pub fn from_datetime(datetime: DateTime<FixedOffset>) -> Self {
        let formatted = datetime.format(WIRE_FORMAT).to_string();
        let mut inner = HeaplessString::new();
        // The fixed format is 25 chars, well within capacity.
        let _ = inner.push_str(&formatted);
        Self(inner)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Lazy parse of the wire text; `None` for malformed values.
    pub fn parse(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.0.as_str()).ok()
    }

    /// Most-recent-first ordering that never panics on malformed values.
    ///
    /// Malformed timestamps compare below every well-formed one, which
    /// keeps the comparator a total order (required by `sort_by`) and gives
    /// such records a deterministic position at the end of a descending
    /// list.
    pub fn cmp_desc(a: &Self, b: &Self) -> Ordering {
        b.parse().cmp(&a.parse())
    }
}

impl std::str::FromStr for OffsetTimestamp {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaplessString::try_from(s)
            .map(Self)
            .map_err(|_| "timestamp text too long")
    }
}

/// Date and time pair captured at submission, both from the local clock.
pub fn local_now_pair() -> (NaiveDate, OffsetTimestamp) {
    let now = Local::now();
    (now.date_naive(), OffsetTimestamp::from_datetime(now.fixed_offset()))
}
