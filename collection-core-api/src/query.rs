/// Result of a token-gated read.
///
/// Reads through the query cache require a stored auth token. When no token
/// is present the read is not issued at all and the caller receives
/// `Disabled` rather than an error, so screens can render an empty state
/// instead of a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// No auth token present; the read was skipped.
    Disabled,
    /// The read completed (from cache or from the backend).
    Ready(T),
}

impl<T> QueryState<T> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, QueryState::Disabled)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            QueryState::Disabled => None,
            QueryState::Ready(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Disabled => QueryState::Disabled,
            QueryState::Ready(value) => QueryState::Ready(f(value)),
        }
    }
}
