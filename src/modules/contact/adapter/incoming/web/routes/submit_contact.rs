use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::contact::application::services::{ContactError, ContactMessage};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let message = ContactMessage {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    match data.contact.submit(message).await {
        Ok(()) => ApiResponse::success(serde_json::json!({"sent": true})),

        Err(err @ ContactError::EmptyName)
        | Err(err @ ContactError::EmptyMessage)
        | Err(err @ ContactError::InvalidEmail(_)) => {
            ApiResponse::bad_request("INVALID_CONTACT_FORM", &err.to_string())
        }

        Err(ContactError::SendFailed(msg)) => {
            error!("contact relay failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_submit_relays_to_recipient() {
        let app_ctx = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Visitor",
                "email": "visitor@example.com",
                "message": "Nice portfolio!"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let sent = app_ctx.outbox.get_sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "owner@example.com");
        assert!(sent[0].2.contains("Nice portfolio!"));
    }

    #[actix_web::test]
    async fn test_invalid_email_is_bad_request() {
        let app_ctx = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Visitor",
                "email": "not-an-email",
                "message": "Hello"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CONTACT_FORM");
        assert!(app_ctx.outbox.get_sent_emails().is_empty());
    }
}
