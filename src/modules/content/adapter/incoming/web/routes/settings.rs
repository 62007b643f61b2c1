use actix_web::{get, patch, web, Responder};

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::records::SettingsPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

// Settings live only in the local persisted store; there is no hosted
// table behind them, so these handlers skip the binding layer.

#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.store.settings())
}

#[patch("/api/admin/settings")]
pub async fn patch_settings_handler(
    _session: AdminSession,
    req: web::Json<SettingsPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.store.update_settings(req.into_inner()))
}
