use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{
    ExperiencePatch, NewExperience,
};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::experiences_view;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    data.experiences.refresh().await;
    let snapshot = data.experiences.snapshot();

    ApiResponse::success(experiences_view(snapshot.data.as_deref().unwrap_or(&[])))
}

#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    _session: AdminSession,
    req: web::Json<NewExperience>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experiences.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating experience failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/experiences/{id}")]
pub async fn patch_experience_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<ExperiencePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.experiences.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(err) => {
            error!("patching experience failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.experiences.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting experience failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
