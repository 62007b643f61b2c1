use actix_web::{get, patch, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::ProfilePatch;
use crate::modules::view::adapters::profile_or_default;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    data.profile.refresh().await;
    let snapshot = data.profile.snapshot();

    ApiResponse::success(profile_or_default(snapshot.data))
}

#[patch("/api/admin/profile")]
pub async fn patch_profile_handler(
    _session: AdminSession,
    req: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.update(req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile row missing")
        }

        Err(err) => {
            error!("patching profile failed: {}", err);
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
    async fn test_get_profile_returns_singleton() {
        let app_ctx = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Your Name");
        assert!(body["data"]["role"].as_array().unwrap().len() >= 2);
    }

    #[actix_web::test]
    async fn test_patch_profile_merges_fields() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(patch_profile_handler)
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"name": "Alex", "avatar": null}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Alex");
        // Unspecified fields retain prior values.
        assert_eq!(body["data"]["location"], "Jakarta, Indonesia");

        // Still exactly one profile afterwards.
        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Alex");
    }

    #[actix_web::test]
    async fn test_patch_profile_requires_session() {
        let app_ctx = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(patch_profile_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/profile")
            .set_json(json!({"name": "Mallory"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
