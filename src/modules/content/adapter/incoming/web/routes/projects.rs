use actix_web::{delete, get, patch, post, web, Responder};
use tracing::error;

use crate::modules::content::adapter::incoming::web::extractors::session::AdminSession;
use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::application::ports::outgoing::records::{NewProject, ProjectPatch};
use crate::modules::content::domain::entities::RecordId;
use crate::modules::view::adapters::{project_detail_view, projects_view};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Public reads
// ──────────────────────────────────────────────────────────
//

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    data.projects.refresh().await;
    let snapshot = data.projects.snapshot();

    // Empty or never-loaded both render the exemplar dataset.
    ApiResponse::success(projects_view(snapshot.data.as_deref().unwrap_or(&[])))
}

#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.projects.get(&id).await {
        Ok(project) => ApiResponse::success(project_detail_view(&project)),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(err) => {
            error!("fetching project failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin writes
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    req: web::Json<NewProject>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.add(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("creating project failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/projects/{id}")]
pub async fn patch_project_handler(
    _session: AdminSession,
    path: web::Path<String>,
    req: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.projects.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(GatewayError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(err) => {
            error!("patching project failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.projects.remove(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(err) => {
            error!("deleting project failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_get_projects_serves_seeded_rows() {
        let app_ctx = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        // Display hint contract: large => 2x2 span.
        assert_eq!(body["data"][0]["size"], "large");
        assert_eq!(body["data"][0]["grid"]["cols"], 2);
        assert_eq!(body["data"][0]["grid"]["rows"], 2);
    }

    #[actix_web::test]
    async fn test_create_requires_session() {
        let app_ctx = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .set_json(json!({
                "title": "T", "description": "D", "category": "Web", "size": "small"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_then_list_contains_project() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(create_project_handler)
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "title": "LED Matrix Clock",
                "description": "Wi-Fi clock on an ESP32",
                "category": "IoT",
                "size": "large",
                "tech": ["SiArduino"],
                "featured": true
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let created_id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(!created_id.is_empty());

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;

        let titles: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect();
        assert!(titles.contains(&"LED Matrix Clock".to_string()));
        // Local path prepends: newest first.
        assert_eq!(titles[0], "LED Matrix Clock");
    }

    #[actix_web::test]
    async fn test_patch_unknown_id_is_not_found() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(patch_project_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/projects/missing")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"title": "x"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_gone() {
        let app_ctx = TestAppStateBuilder::default().build();
        let token = app_ctx.login();
        let id = app_ctx.store.projects()[0].id.clone();

        let app = test::init_service(
            App::new()
                .app_data(app_ctx.state.clone())
                .app_data(app_ctx.sessions_data())
                .service(delete_project_handler)
                .service(get_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/projects/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // Deleting the same id again still succeeds.
        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/projects/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
