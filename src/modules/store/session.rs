// src/modules/store/session.rs
//
// Short-lived admin session, kept apart from the durable content snapshot
// so clearing one never touches the other. Single-user: at most one
// session token is live at a time.

use std::sync::Mutex;

use uuid::Uuid;

pub struct SessionStore {
    admin_password: String,
    token: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            admin_password: admin_password.into(),
            token: Mutex::new(None),
        }
    }

    /// Compare against the configured password; on a match, mint a bearer
    /// token and mark the session authenticated. A second login replaces
    /// the previous token.
    pub fn login(&self, password: &str) -> Option<String> {
        if password != self.admin_password {
            return None;
        }

        let token = Uuid::new_v4().to_string();
        *self.token.lock().expect("session state poisoned") = Some(token.clone());
        Some(token)
    }

    pub fn logout(&self) {
        *self.token.lock().expect("session state poisoned") = None;
    }

    pub fn is_authenticated(&self, token: &str) -> bool {
        self.token
            .lock()
            .expect("session state poisoned")
            .as_deref()
            == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_correct_password_issues_token() {
        let store = SessionStore::new("admin123");
        let token = store.login("admin123").unwrap();
        assert!(store.is_authenticated(&token));
    }

    #[test]
    fn test_login_with_wrong_password_is_rejected() {
        let store = SessionStore::new("admin123");
        assert!(store.login("nope").is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let store = SessionStore::new("admin123");
        let token = store.login("admin123").unwrap();

        store.logout();
        assert!(!store.is_authenticated(&token));
    }

    #[test]
    fn test_second_login_replaces_token() {
        let store = SessionStore::new("admin123");
        let first = store.login("admin123").unwrap();
        let second = store.login("admin123").unwrap();

        assert!(!store.is_authenticated(&first));
        assert!(store.is_authenticated(&second));
    }
}
