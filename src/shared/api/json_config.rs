// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

// Inline image bodies (base64 of up to 2MB raw) exceed actix's default
// JSON payload limit, so the cap is raised here for the whole surface.
const JSON_PAYLOAD_LIMIT: usize = 6 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
