use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::modules::contact::application::ports::outgoing::email_sender::EmailSender;

/// Records deliveries instead of performing them; for tests and for
/// running the stack without an SMTP relay configured.
#[derive(Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        self.sent_emails.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        Ok(())
    }
}
