pub mod modules;
pub use modules::contact;
pub use modules::content;
pub use modules::media;
pub use modules::store;
pub use modules::view;
pub mod health;
pub mod shared;

use crate::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::contact::application::ports::outgoing::email_sender::EmailSender;
use crate::contact::application::services::ContactService;
use crate::content::adapter::outgoing::local::{
    LocalCertificatesGateway, LocalEducationGateway, LocalExperiencesGateway,
    LocalHighlightsGateway, LocalProfileGateway, LocalProjectsGateway, LocalSkillsGateway,
    LocalStatsGateway,
};
use crate::content::adapter::outgoing::postgres::certificates_gateway::CertificatesGatewayPostgres;
use crate::content::adapter::outgoing::postgres::education_gateway::EducationGatewayPostgres;
use crate::content::adapter::outgoing::postgres::experiences_gateway::ExperiencesGatewayPostgres;
use crate::content::adapter::outgoing::postgres::highlights_gateway::HighlightsGatewayPostgres;
use crate::content::adapter::outgoing::postgres::profile_gateway::ProfileGatewayPostgres;
use crate::content::adapter::outgoing::postgres::projects_gateway::ProjectsGatewayPostgres;
use crate::content::adapter::outgoing::postgres::skills_gateway::SkillsGatewayPostgres;
use crate::content::adapter::outgoing::postgres::stats_gateway::StatsGatewayPostgres;
use crate::content::application::binding::{CollectionBinding, ProfileBinding};
use crate::content::application::ports::outgoing::records::{
    CertificatePatch, EducationPatch, ExperiencePatch, HighlightPatch, NewCertificate,
    NewEducation, NewExperience, NewHighlight, NewProject, NewSkill, NewStat, ProjectPatch,
    SkillPatch, StatPatch,
};
use crate::content::domain::entities::{
    Certificate, Education, Experience, Highlight, Project, Skill, Stat,
};
use crate::media::upload_policy::InlineImagePolicy;
use crate::store::session::SessionStore;
use crate::store::snapshot::FileSnapshotStore;
use crate::store::store::ContentStore;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ProfileBinding>,
    pub projects: Arc<CollectionBinding<Project, NewProject, ProjectPatch>>,
    pub experiences: Arc<CollectionBinding<Experience, NewExperience, ExperiencePatch>>,
    pub education: Arc<CollectionBinding<Education, NewEducation, EducationPatch>>,
    pub skills: Arc<CollectionBinding<Skill, NewSkill, SkillPatch>>,
    pub certificates: Arc<CollectionBinding<Certificate, NewCertificate, CertificatePatch>>,
    pub highlights: Arc<CollectionBinding<Highlight, NewHighlight, HighlightPatch>>,
    pub stats: Arc<CollectionBinding<Stat, NewStat, StatPatch>>,
    /// Always present: settings live here, and it backs the local path.
    pub store: Arc<ContentStore>,
    pub contact: Arc<ContactService>,
    pub image_policy: InlineImagePolicy,
}

impl AppState {
    /// Wire every binding against the Postgres gateways.
    pub fn with_postgres(
        db: Arc<DatabaseConnection>,
        store: Arc<ContentStore>,
        contact: Arc<ContactService>,
    ) -> Self {
        Self {
            profile: Arc::new(ProfileBinding::new(Arc::new(ProfileGatewayPostgres::new(
                Arc::clone(&db),
            )))),
            projects: Arc::new(CollectionBinding::new(
                "projects",
                Arc::new(ProjectsGatewayPostgres::new(Arc::clone(&db))),
            )),
            experiences: Arc::new(CollectionBinding::new(
                "experiences",
                Arc::new(ExperiencesGatewayPostgres::new(Arc::clone(&db))),
            )),
            education: Arc::new(CollectionBinding::new(
                "education",
                Arc::new(EducationGatewayPostgres::new(Arc::clone(&db))),
            )),
            skills: Arc::new(CollectionBinding::new(
                "skills",
                Arc::new(SkillsGatewayPostgres::new(Arc::clone(&db))),
            )),
            certificates: Arc::new(CollectionBinding::new(
                "certificates",
                Arc::new(CertificatesGatewayPostgres::new(Arc::clone(&db))),
            )),
            highlights: Arc::new(CollectionBinding::new(
                "highlights",
                Arc::new(HighlightsGatewayPostgres::new(Arc::clone(&db))),
            )),
            stats: Arc::new(CollectionBinding::new(
                "stats",
                Arc::new(StatsGatewayPostgres::new(db)),
            )),
            store,
            contact,
            image_policy: InlineImagePolicy::new(),
        }
    }

    /// Wire every binding against the local persisted store instead of the
    /// hosted backend. Exactly one path is live per process.
    pub fn with_local_store(store: Arc<ContentStore>, contact: Arc<ContactService>) -> Self {
        Self {
            profile: Arc::new(ProfileBinding::new(Arc::new(LocalProfileGateway::new(
                Arc::clone(&store),
            )))),
            projects: Arc::new(CollectionBinding::new(
                "projects",
                Arc::new(LocalProjectsGateway::new(Arc::clone(&store))),
            )),
            experiences: Arc::new(CollectionBinding::new(
                "experiences",
                Arc::new(LocalExperiencesGateway::new(Arc::clone(&store))),
            )),
            education: Arc::new(CollectionBinding::new(
                "education",
                Arc::new(LocalEducationGateway::new(Arc::clone(&store))),
            )),
            skills: Arc::new(CollectionBinding::new(
                "skills",
                Arc::new(LocalSkillsGateway::new(Arc::clone(&store))),
            )),
            certificates: Arc::new(CollectionBinding::new(
                "certificates",
                Arc::new(LocalCertificatesGateway::new(Arc::clone(&store))),
            )),
            highlights: Arc::new(CollectionBinding::new(
                "highlights",
                Arc::new(LocalHighlightsGateway::new(Arc::clone(&store))),
            )),
            stats: Arc::new(CollectionBinding::new(
                "stats",
                Arc::new(LocalStatsGateway::new(Arc::clone(&store))),
            )),
            store,
            contact,
            image_policy: InlineImagePolicy::new(),
        }
    }

    /// First fetch for every binding, the on-mount load of the public site.
    pub async fn prime(&self) {
        self.profile.refresh().await;
        self.projects.refresh().await;
        self.experiences.refresh().await;
        self.education.refresh().await;
        self.skills.refresh().await;
        self.certificates.refresh().await;
        self.highlights.refresh().await;
        self.stats.refresh().await;
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    // Admin credentials and session store (kept apart from content data)
    let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    let sessions = Arc::new(SessionStore::new(admin_password));

    // Local persisted store: always constructed, it owns settings and the
    // local content path.
    let snapshot_path = env::var("CONTENT_SNAPSHOT_PATH")
        .unwrap_or_else(|_| format!("data/{}", FileSnapshotStore::DEFAULT_FILE_NAME));
    let content_store = Arc::new(ContentStore::new(Box::new(FileSnapshotStore::new(
        snapshot_path,
    ))));

    // Contact relay
    let contact_recipient =
        env::var("CONTACT_RECIPIENT").expect("CONTACT_RECIPIENT is not set in .env file");
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM is not set in .env file");
    let smtp_sender = if env_name == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP_SERVER")
    };
    let email_sender: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let contact_service = Arc::new(ContactService::new(email_sender, contact_recipient));

    // Content source selection: postgres (default) or the local store.
    let content_source = env::var("CONTENT_SOURCE").unwrap_or_else(|_| "postgres".to_string());

    let mut db_for_server: Option<Arc<DatabaseConnection>> = None;
    let state = if content_source == "local" {
        info!("Content source: local persisted store");
        AppState::with_local_store(Arc::clone(&content_store), contact_service)
    } else {
        info!("Content source: postgres");
        let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");

        let mut opt = ConnectOptions::new(db_url);
        opt.max_connections(50)
            .min_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .expect("Failed to connect to database");

        let db_arc = Arc::new(conn);
        db_for_server = Some(Arc::clone(&db_arc));

        AppState::with_postgres(db_arc, Arc::clone(&content_store), contact_service)
    };

    // Initial fetch; failures leave the bindings serving fallback defaults.
    state.prime().await;

    println!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&sessions)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes);

        if let Some(db) = &db_for_server {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::contact::adapter::incoming::web::routes as contact_routes;
    use crate::content::adapter::incoming::web::routes as content_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(content_routes::profile::get_profile_handler);
    cfg.service(content_routes::profile::patch_profile_handler);
    // Projects
    cfg.service(content_routes::projects::get_projects_handler);
    cfg.service(content_routes::projects::get_project_handler);
    cfg.service(content_routes::projects::create_project_handler);
    cfg.service(content_routes::projects::patch_project_handler);
    cfg.service(content_routes::projects::delete_project_handler);
    // Experiences
    cfg.service(content_routes::experiences::get_experiences_handler);
    cfg.service(content_routes::experiences::create_experience_handler);
    cfg.service(content_routes::experiences::patch_experience_handler);
    cfg.service(content_routes::experiences::delete_experience_handler);
    // Education
    cfg.service(content_routes::education::get_education_handler);
    cfg.service(content_routes::education::create_education_handler);
    cfg.service(content_routes::education::patch_education_handler);
    cfg.service(content_routes::education::delete_education_handler);
    // Skills
    cfg.service(content_routes::skills::get_skills_handler);
    cfg.service(content_routes::skills::create_skill_handler);
    cfg.service(content_routes::skills::patch_skill_handler);
    cfg.service(content_routes::skills::delete_skill_handler);
    // Certificates
    cfg.service(content_routes::certificates::get_certificates_handler);
    cfg.service(content_routes::certificates::get_certificates_by_year_handler);
    cfg.service(content_routes::certificates::create_certificate_handler);
    cfg.service(content_routes::certificates::patch_certificate_handler);
    cfg.service(content_routes::certificates::delete_certificate_handler);
    // Highlights
    cfg.service(content_routes::highlights::get_highlights_handler);
    cfg.service(content_routes::highlights::create_highlight_handler);
    cfg.service(content_routes::highlights::patch_highlight_handler);
    cfg.service(content_routes::highlights::delete_highlight_handler);
    // Stats
    cfg.service(content_routes::stats::get_stats_handler);
    cfg.service(content_routes::stats::create_stat_handler);
    cfg.service(content_routes::stats::patch_stat_handler);
    cfg.service(content_routes::stats::delete_stat_handler);
    // Settings
    cfg.service(content_routes::settings::get_settings_handler);
    cfg.service(content_routes::settings::patch_settings_handler);
    // Admin session + media
    cfg.service(content_routes::auth::login_handler);
    cfg.service(content_routes::auth::logout_handler);
    cfg.service(content_routes::images::encode_image_handler);
    // Contact
    cfg.service(contact_routes::submit_contact::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
