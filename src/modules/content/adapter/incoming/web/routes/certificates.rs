use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{
    CertificatePatch, NewCertificate,
};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::{certificates_view, group_certificates_by_year};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> impl Responder {
    data.certificates.refresh().await;
    let snapshot = data.certificates.snapshot();

    ApiResponse::success(certificates_view(snapshot.data.as_deref().unwrap_or(&[])))
}

/// Grouped variant used by the certificates page: years descending,
/// insertion order kept inside each year.
#[get("/api/certificates/by-year")]
pub async fn get_certificates_by_year_handler(data: web::Data<AppState>) -> impl Responder {
    data.certificates.refresh().await;
    let snapshot = data.certificates.snapshot();

    let views = certificates_view(snapshot.data.as_deref().unwrap_or(&[]));
    ApiResponse::success(group_certificates_by_year(&views))
}

#[post("/api/admin/certificates")]
pub async fn create_certificate_handler(
    _session: AdminSession,
    req: web::Json<NewCertificate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certificates.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating certificate failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/certificates/{id}")]
pub async fn patch_certificate_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<CertificatePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.certificates.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(err) => {
            error!("patching certificate failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/certificates/{id}")]
pub async fn delete_certificate_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.certificates.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting certificate failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
