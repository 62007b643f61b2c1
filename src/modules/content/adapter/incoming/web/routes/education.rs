use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{
    EducationPatch, NewEducation,
};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::education_view;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    data.education.refresh().await;
    let snapshot = data.education.snapshot();

    ApiResponse::success(education_view(snapshot.data.as_deref().unwrap_or(&[])))
}

#[post("/api/admin/education")]
pub async fn create_education_handler(
    _session: AdminSession,
    req: web::Json<NewEducation>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating education entry failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/education/{id}")]
pub async fn patch_education_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<EducationPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.education.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }

        Err(err) => {
            error!("patching education entry failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.education.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting education entry failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
