// src/tests/support/app_state_builder.rs
//
// Route-test scaffolding: an AppState wired to the local path over an
// in-memory snapshot, with a recording contact relay and a session store.
// Every test gets isolated state.

use actix_web::web;
use std::sync::Arc;

use crate::contact::adapter::outgoing::mock_sender::MockEmailSender;
use crate::contact::application::ports::outgoing::email_sender::EmailSender;
use crate::contact::application::services::ContactService;
use crate::store::session::SessionStore;
use crate::store::snapshot::MemorySnapshotStore;
use crate::store::store::ContentStore;
use crate::AppState;

pub struct TestApp {
    pub state: web::Data<AppState>,
    pub sessions: Arc<SessionStore>,
    pub store: Arc<ContentStore>,
    pub outbox: Arc<MockEmailSender>,
    admin_password: String,
}

impl TestApp {
    pub fn sessions_data(&self) -> web::Data<Arc<SessionStore>> {
        web::Data::new(Arc::clone(&self.sessions))
    }

    /// Open an admin session with the builder's password.
    pub fn login(&self) -> String {
        self.sessions
            .login(&self.admin_password)
            .expect("test admin password rejected")
    }
}

pub struct TestAppStateBuilder {
    admin_password: String,
    contact_recipient: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            admin_password: "admin123".to_string(),
            contact_recipient: "owner@example.com".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_admin_password(mut self, password: &str) -> Self {
        self.admin_password = password.to_string();
        self
    }

    pub fn build(self) -> TestApp {
        let store = Arc::new(ContentStore::new(Box::new(MemorySnapshotStore::new())));
        let outbox = Arc::new(MockEmailSender::new());
        let sender: Arc<dyn EmailSender> = Arc::clone(&outbox) as Arc<dyn EmailSender>;
        let contact = Arc::new(ContactService::new(sender, self.contact_recipient));
        let sessions = Arc::new(SessionStore::new(self.admin_password.clone()));

        let state = AppState::with_local_store(Arc::clone(&store), contact);

        TestApp {
            state: web::Data::new(state),
            sessions,
            store,
            outbox,
            admin_password: self.admin_password,
        }
    }
}
