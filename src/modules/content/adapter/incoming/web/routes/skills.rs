use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{NewSkill, SkillPatch};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::skills_view;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    data.skills.refresh().await;
    let snapshot = data.skills.snapshot();

    ApiResponse::success(skills_view(snapshot.data.as_deref().unwrap_or(&[])))
}

#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _session: AdminSession,
    req: web::Json<NewSkill>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating skill failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/skills/{id}")]
pub async fn patch_skill_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<SkillPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.skills.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),

        Err(err) => {
            error!("patching skill failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.skills.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting skill failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
