use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::auth::{AuthResponse, Role};

/// The authenticated session as the client holds it between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.user_id,
            username: response.username,
            role: response.role,
        }
    }
}

/// Injectable session state. The HTTP client reads the token from here on
/// every request and clears it on 401; login writes it, logout clears it.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn store(&self, session: Session);
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    fn store(&self, session: Session) {
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            user_id: "u-1".to_string(),
            username: "admin".to_string(),
            role: Role::Administrator,
        }
    }

    #[test]
    fn store_then_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.store(sample_session());
        assert_eq!(store.token().as_deref(), Some("jwt-token"));

        store.clear();
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }
}
