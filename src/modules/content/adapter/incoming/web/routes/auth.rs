use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::store::session::SessionStore;
use crate::shared::api::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[post("/api/admin/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    sessions: web::Data<Arc<SessionStore>>,
) -> impl Responder {
    match sessions.login(&req.password) {
        Some(token) => ApiResponse::success(LoginResponse { token }),

        None => ApiResponse::unauthorized("INVALID_CREDENTIALS", "Wrong password"),
    }
}

#[post("/api/admin/logout")]
pub async fn logout_handler(
    _session: AdminSession,
    sessions: web::Data<Arc<SessionStore>>,
) -> impl Responder {
    sessions.logout();
    ApiResponse::no_content()
}
