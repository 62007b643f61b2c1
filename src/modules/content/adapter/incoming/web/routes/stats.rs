use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{NewStat, StatPatch};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::stats_view;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/stats")]
pub async fn get_stats_handler(data: web::Data<AppState>) -> impl Responder {
    data.stats.refresh().await;
    let snapshot = data.stats.snapshot();

    ApiResponse::success(stats_view(snapshot.data.as_deref().unwrap_or(&[])))
}

#[post("/api/admin/stats")]
pub async fn create_stat_handler(
    _session: AdminSession,
    req: web::Json<NewStat>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.stats.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating stat failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/stats/{id}")]
pub async fn patch_stat_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<StatPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.stats.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => ApiResponse::not_found("STAT_NOT_FOUND", "Stat not found"),

        Err(err) => {
            error!("patching stat failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/stats/{id}")]
pub async fn delete_stat_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.stats.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting stat failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
