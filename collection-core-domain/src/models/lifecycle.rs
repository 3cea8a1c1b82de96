use crate::models::timestamp::OffsetTimestamp;

/// Lifecycle of a movement or loan record.
///
/// On the wire this is encoded only by the nullability of the return
/// timestamp; the tagged form exists so domain code never branches on raw
/// `Option` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Finished { returned_at: OffsetTimestamp },
}

impl Lifecycle {
    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    /// Boundary translation from the nullable wire field.
    pub fn from_return_time(return_time: Option<&OffsetTimestamp>) -> Self {
        match return_time {
            None => Lifecycle::Active,
            Some(ts) => Lifecycle::Finished {
                returned_at: ts.clone(),
            },
        }
    }
}

/// Records that carry the active/finished convention and a primary
/// timestamp used for ordering.
pub trait LifecycleAware {
    fn lifecycle(&self) -> Lifecycle;

    /// Timestamp the descending list order is based on (movement time or
    /// loan time).
    fn effective_time(&self) -> &OffsetTimestamp;
}

/// Active and finished records, each most-recent-first.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedRecords<T> {
    pub active: Vec<T>,
    pub finished: Vec<T>,
}

/// Splits records into active and finished groups and sorts each group by
/// its effective time, descending. Malformed timestamps sort last within
/// their group instead of failing the render.
pub fn partition_records<T: LifecycleAware>(items: Vec<T>) -> PartitionedRecords<T> {
    let (mut active, mut finished): (Vec<T>, Vec<T>) =
        items.into_iter().partition(|item| item.lifecycle().is_active());
    active.sort_by(|a, b| OffsetTimestamp::cmp_desc(a.effective_time(), b.effective_time()));
    finished.sort_by(|a, b| OffsetTimestamp::cmp_desc(a.effective_time(), b.effective_time()));
    PartitionedRecords { active, finished }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    struct Record {
        name: &'static str,
        time: OffsetTimestamp,
        returned: Option<OffsetTimestamp>,
    }

    impl Record {
        fn new(name: &'static str, time: &str, returned: Option<&str>) -> Self {
            Self {
                name,
                time: OffsetTimestamp::from_str(time).unwrap(),
                returned: returned.map(|r| OffsetTimestamp::from_str(r).unwrap()),
            }
        }
    }

    impl LifecycleAware for Record {
        fn lifecycle(&self) -> Lifecycle {
            Lifecycle::from_return_time(self.returned.as_ref())
        }

        fn effective_time(&self) -> &OffsetTimestamp {
            &self.time
        }
    }

    #[test]
    fn partitions_by_return_presence_and_sorts_descending() {
        let items = vec![
            Record::new("old-active", "2024-01-01T08:00:00-03:00", None),
            Record::new(
                "finished",
                "2024-01-05T08:00:00-03:00",
                Some("2024-01-06T08:00:00-03:00"),
            ),
            Record::new("new-active", "2024-03-01T08:00:00-03:00", None),
        ];
        let partitioned = partition_records(items);
        let active: Vec<_> = partitioned.active.iter().map(|r| r.name).collect();
        assert_eq!(active, vec!["new-active", "old-active"]);
        let finished: Vec<_> = partitioned.finished.iter().map(|r| r.name).collect();
        assert_eq!(finished, vec!["finished"]);
    }

    #[test]
    fn malformed_time_does_not_panic_and_sorts_last() {
        let items = vec![
            Record::new("broken", "garbage", None),
            Record::new("ok", "2024-01-01T08:00:00-03:00", None),
        ];
        let partitioned = partition_records(items);
        let names: Vec<_> = partitioned.active.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["ok", "broken"]);
    }
}
