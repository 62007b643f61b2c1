// src/modules/contact/application/services/contact_service.rs
//
// Contact form submissions relayed to the site owner's inbox. Validation
// happens before the relay is touched; delivery failure surfaces to the
// route, where the visitor can simply re-submit (no retry machinery).

use std::sync::Arc;

use email_address::EmailAddress;

use crate::modules::contact::application::ports::outgoing::email_sender::EmailSender;

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid sender address: {0}")]
    InvalidEmail(String),

    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Sending failed: {0}")]
    SendFailed(String),
}

#[derive(Clone)]
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    recipient: String,
}

impl ContactService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }

    pub async fn submit(&self, message: ContactMessage) -> Result<(), ContactError> {
        let name = message.name.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }

        let email = message.email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        let body_text = message.message.trim();
        if body_text.is_empty() {
            return Err(ContactError::EmptyMessage);
        }

        let subject = format!("Portfolio contact from {}", name);
        let body = format!(
            "<p><strong>From:</strong> {} &lt;{}&gt;</p><p>{}</p>",
            name, email, body_text
        );

        self.sender
            .send_email(&self.recipient, &subject, &body)
            .await
            .map_err(ContactError::SendFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
        }
    }

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_to_configured_recipient() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(eq("owner@example.com"), always(), always())
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = ContactService::new(Arc::new(sender), "owner@example.com");
        let result = service
            .submit(message("Visitor", "visitor@example.com", "Hello there"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_before_send() {
        let mut sender = MockEmailSenderMock::new();
        sender.expect_send_email().times(0);

        let service = ContactService::new(Arc::new(sender), "owner@example.com");
        let result = service
            .submit(message("Visitor", "not-an-email", "Hello"))
            .await;

        assert!(matches!(result.unwrap_err(), ContactError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_empty_fields_are_rejected() {
        let mut sender = MockEmailSenderMock::new();
        sender.expect_send_email().times(0);
        let service = ContactService::new(Arc::new(sender), "owner@example.com");

        let result = service.submit(message("  ", "v@example.com", "Hi")).await;
        assert!(matches!(result.unwrap_err(), ContactError::EmptyName));

        let result = service.submit(message("V", "v@example.com", "   ")).await;
        assert!(matches!(result.unwrap_err(), ContactError::EmptyMessage));
    }

    #[tokio::test]
    async fn test_relay_failure_surfaces() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err("smtp unreachable".to_string()));

        let service = ContactService::new(Arc::new(sender), "owner@example.com");
        let result = service
            .submit(message("Visitor", "visitor@example.com", "Hello"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ContactError::SendFailed(msg) if msg.contains("smtp unreachable")
        ));
    }
}
