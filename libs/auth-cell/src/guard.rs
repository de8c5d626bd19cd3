use std::sync::Arc;

use tracing::debug;

use shared_models::session::{Session, SessionStore};

/// Outcome of the session gate in front of every list/form screen.
#[derive(Debug, Clone)]
pub enum Access {
    Granted(Session),
    RedirectToLogin,
}

/// Binary authenticated-session check. Real authorization lives in the
/// backend; this only keeps signed-out users off the screens.
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn check(&self) -> Access {
        match self.store.load() {
            Some(session) => Access::Granted(session),
            None => {
                debug!("no session, redirecting to login");
                Access::RedirectToLogin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_models::auth::Role;
    use shared_models::session::MemorySessionStore;

    #[test]
    fn gate_follows_session_presence() {
        let store = Arc::new(MemorySessionStore::new());
        let guard = SessionGuard::new(store.clone());

        assert_matches!(guard.check(), Access::RedirectToLogin);

        store.store(Session {
            token: "t".to_string(),
            user_id: "u-1".to_string(),
            username: "admin".to_string(),
            role: Role::Administrator,
        });
        assert_matches!(guard.check(), Access::Granted(_));

        store.clear();
        assert_matches!(guard.check(), Access::RedirectToLogin);
    }
}
