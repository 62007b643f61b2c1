use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::postgres::{from_json, map_db_err, to_json};
use crate::modules::content::adapter::outgoing::sea_orm_entity::profile::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    GatewayError, PatchField, ProfileGateway,
};
use crate::modules::content::application::ports::outgoing::records::ProfilePatch;
use crate::modules::content::domain::entities::{Profile, RecordId};

// ============================================================================
// Gateway Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileGateway for ProfileGatewayPostgres {
    async fn get(&self) -> Result<Profile, GatewayError> {
        let row = Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        model_to_profile(row)
    }

    async fn update(&self, data: ProfilePatch) -> Result<Profile, GatewayError> {
        // Singleton table: resolve the one row first, then merge into it.
        let current = Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }
        if let PatchField::Value(role) = data.role {
            model.role = Set(role);
        }
        if let PatchField::Value(semester) = data.semester {
            model.semester = Set(semester);
        }
        if let PatchField::Value(university) = data.university {
            model.university = Set(university);
        }
        if let PatchField::Value(year) = data.year {
            model.year = Set(year);
        }
        if let PatchField::Value(bio) = data.bio {
            model.bio = Set(bio);
        }
        if let PatchField::Value(email) = data.email {
            model.email = Set(email);
        }
        if let PatchField::Value(location) = data.location {
            model.location = Set(location);
        }
        match data.avatar {
            PatchField::Unset => {}
            PatchField::Null => model.avatar = Set(None),
            PatchField::Value(avatar) => model.avatar = Set(Some(avatar)),
        }
        if let PatchField::Value(social) = data.social {
            model.social = Set(to_json(&social)?);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(current.id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        model_to_profile(row)
    }
}

fn model_to_profile(model: profile::Model) -> Result<Profile, GatewayError> {
    Ok(Profile {
        id: RecordId::from(model.id),
        name: model.name,
        role: model.role,
        semester: model.semester,
        university: model.university,
        year: model.year,
        bio: model.bio,
        email: model.email,
        location: model.location,
        avatar: model.avatar,
        social: from_json(&model.social)?,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn mock_profile_model(id: Uuid, name: &str) -> profile::Model {
        let now = Utc::now().fixed_offset();
        profile::Model {
            id,
            name: name.to_string(),
            role: vec!["Web Developer".to_string()],
            semester: "5".to_string(),
            university: "Universitas Indonesia".to_string(),
            year: "2024".to_string(),
            bio: vec!["First paragraph.".to_string()],
            email: "me@example.com".to_string(),
            location: "Jakarta, Indonesia".to_string(),
            avatar: None,
            social: serde_json::json!({"github": "https://github.com"}),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_returns_single_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_profile_model(id, "Your Name")]])
            .into_connection();

        let gateway = ProfileGatewayPostgres::new(Arc::new(db));
        let profile = gateway.get().await.unwrap();

        assert_eq!(profile.id, RecordId::from(id));
        assert_eq!(profile.name, "Your Name");
        assert_eq!(profile.social.get("github").unwrap(), "https://github.com");
    }

    #[tokio::test]
    async fn test_get_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profile::Model>::new()])
            .into_connection();

        let gateway = ProfileGatewayPostgres::new(Arc::new(db));
        let result = gateway.get().await;

        assert!(matches!(result.unwrap_err(), GatewayError::NotFound));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let id = Uuid::new_v4();
        let mut updated = mock_profile_model(id, "New Name");
        updated.location = "Bandung, Indonesia".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_profile_model(id, "Your Name")]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let gateway = ProfileGatewayPostgres::new(Arc::new(db));
        let profile = gateway
            .update(ProfilePatch {
                name: PatchField::Value("New Name".to_string()),
                location: PatchField::Value("Bandung, Indonesia".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(profile.name, "New Name");
        assert_eq!(profile.location, "Bandung, Indonesia");
    }

    #[tokio::test]
    async fn test_update_clears_avatar_on_null() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_profile_model(id, "Your Name")]])
            .append_query_results(vec![vec![mock_profile_model(id, "Your Name")]])
            .into_connection();

        let gateway = ProfileGatewayPostgres::new(Arc::new(db));
        let profile = gateway
            .update(ProfilePatch {
                avatar: PatchField::Null,
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(profile.avatar.is_none());
    }

    #[tokio::test]
    async fn test_update_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let gateway = ProfileGatewayPostgres::new(Arc::new(db));
        let result = gateway.update(ProfilePatch::default()).await;

        match result.unwrap_err() {
            GatewayError::DatabaseError(msg) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
