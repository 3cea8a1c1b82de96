use parking_lot::RwLock;

/// Process-wide bearer-token storage.
///
/// Shared by the transport layer (token attachment) and the query cache
/// (read gating). A 401 from any call clears it globally, which disables
/// every token-gated read until re-login.
#[derive(Default)]
pub struct AuthSession {
    token: RwLock<Option<String>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lifecycle() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());
        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));
        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }
}
