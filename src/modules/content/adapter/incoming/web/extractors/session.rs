// src/modules/content/adapter/incoming/web/extractors/session.rs

use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::store::session::SessionStore;
use crate::shared::api::ApiResponse;

/// Guard for the admin surface: a bearer token that matches the live
/// session issued by `POST /api/admin/login`.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let sessions = match req.app_data::<actix_web::web::Data<Arc<SessionStore>>>() {
            Some(sessions) => sessions,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        if sessions.is_authenticated(&token) {
            ready(Ok(AdminSession { token }))
        } else {
            ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_SESSION",
                "Not logged in",
            ))))
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
