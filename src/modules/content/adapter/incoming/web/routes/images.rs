use actix_web::{post, web, Responder};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::media::data_url::{encode_inline_image, InlineImageError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InlineImageRequest {
    pub mime_type: String,
    /// Raw file bytes, base64-encoded for transport.
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct InlineImageResponse {
    pub data_url: String,
}

/// Turn an uploaded image into the inline representation stored in
/// `image` / `avatar` / `gallery` fields. Validation rejects the upload
/// before anything is written anywhere.
#[post("/api/admin/images")]
pub async fn encode_image_handler(
    _session: AdminSession,
    req: web::Json<InlineImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bytes = match STANDARD.decode(&req.data) {
        Ok(bytes) => bytes,
        Err(_) => {
            return ApiResponse::bad_request("INVALID_PAYLOAD", "Image payload is not valid base64")
        }
    };

    match encode_inline_image(&data.image_policy, &req.mime_type, &bytes) {
        Ok(data_url) => ApiResponse::success(InlineImageResponse { data_url }),

        Err(err @ InlineImageError::TooLarge { .. }) => {
            ApiResponse::bad_request("IMAGE_TOO_LARGE", &err.to_string())
        }

        Err(err @ InlineImageError::UnsupportedType(_)) => {
            ApiResponse::bad_request("UNSUPPORTED_IMAGE_TYPE", &err.to_string())
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
    async fn test_small_image_is_encoded() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .app_data(crate::shared::api::json_config::custom_json_config())
                .service(encode_image_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/images")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "mime_type": "image/png",
                "data": STANDARD.encode([0x89u8, 0x50, 0x4e, 0x47])
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["data_url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[actix_web::test]
    async fn test_three_mib_upload_is_rejected() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .app_data(crate::shared::api::json_config::custom_json_config())
                .service(encode_image_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/images")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "mime_type": "image/jpeg",
                "data": STANDARD.encode(vec![0u8; 3 * 1024 * 1024])
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "IMAGE_TOO_LARGE");
    }

    #[actix_web::test]
    async fn test_bad_base64_is_rejected() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .app_data(crate::shared::api::json_config::custom_json_config())
                .service(encode_image_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/images")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"mime_type": "image/png", "data": "@@not-base64@@"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_PAYLOAD");
    }
}
