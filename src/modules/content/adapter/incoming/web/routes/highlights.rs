use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{
    HighlightPatch, NewHighlight,
};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::highlights_view;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/highlights")]
pub async fn get_highlights_handler(data: web::Data<AppState>) -> impl Responder {
    data.highlights.refresh().await;
    let snapshot = data.highlights.snapshot();

    ApiResponse::success(highlights_view(snapshot.data.as_deref().unwrap_or(&[])))
}

#[post("/api/admin/highlights")]
pub async fn create_highlight_handler(
    _session: AdminSession,
    req: web::Json<NewHighlight>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.highlights.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating highlight failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/highlights/{id}")]
pub async fn patch_highlight_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<HighlightPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.highlights.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("HIGHLIGHT_NOT_FOUND", "Highlight not found")
        }

        Err(err) => {
            error!("patching highlight failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/highlights/{id}")]
pub async fn delete_highlight_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.highlights.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting highlight failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
