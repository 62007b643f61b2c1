use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{
    ExperiencePatch, NewExperience,
};
use crate::modules::content::domain::entities::{Experience, RecordId};

#[derive(Clone)]
pub struct ExperiencesGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperiencesGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Experience, NewExperience, ExperiencePatch> for ExperiencesGatewayPostgres {
    async fn list(&self) -> Result<Vec<Experience>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_experience).collect())
    }

    async fn get(&self, id: &RecordId) -> Result<Experience, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        Ok(model_to_experience(row))
    }

    async fn create(&self, data: NewExperience) -> Result<Experience, GatewayError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            organization: Set(data.organization),
            period: Set(data.period),
            description: Set(data.description),
            skills: Set(data.skills),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_experience(row))
    }

    async fn update(&self, id: &RecordId, data: ExperiencePatch) -> Result<Experience, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(organization) = data.organization {
            model.organization = Set(organization);
        }
        if let PatchField::Value(period) = data.period {
            model.period = Set(period);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(skills) = data.skills {
            model.skills = Set(skills);
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        let has_changes = model.title.is_set()
            || model.organization.is_set()
            || model.period.is_set()
            || model.description.is_set()
            || model.skills.is_set()
            || model.order_index.is_set();

        if !has_changes {
            let row = Entity::find_by_id(uuid)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(GatewayError::NotFound)?;

            return Ok(model_to_experience(row));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        Ok(model_to_experience(row))
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        let Some(uuid) = parse_record_uuid(id) else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_experience(model: experiences::Model) -> Experience {
    Experience {
        id: RecordId::from(model.id),
        title: model.title,
        organization: model.organization,
        period: model.period,
        description: model.description,
        skills: model.skills,
        order_index: model.order_index,
        created_at: model.created_at.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_experience_model(id: Uuid, title: &str) -> experiences::Model {
        experiences::Model {
            id,
            title: title.to_string(),
            organization: "Tech Startup XYZ".to_string(),
            period: "Jun 2024 - Aug 2024".to_string(),
            description: "Built web features".to_string(),
            skills: vec!["React".to_string()],
            order_index: 0,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_create_experience_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_experience_model(id, "Frontend Intern")]])
            .into_connection();

        let gateway = ExperiencesGatewayPostgres::new(Arc::new(db));
        let experience = gateway
            .create(NewExperience {
                title: "Frontend Intern".to_string(),
                organization: "Tech Startup XYZ".to_string(),
                period: "Jun 2024 - Aug 2024".to_string(),
                description: "Built web features".to_string(),
                skills: vec!["React".to_string()],
                order_index: 0,
            })
            .await
            .unwrap();

        assert_eq!(experience.id, RecordId::from(id));
        assert_eq!(experience.organization, "Tech Startup XYZ");
    }

    #[tokio::test]
    async fn test_update_empty_patch_returns_current_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_experience_model(id, "Original")]])
            .into_connection();

        let gateway = ExperiencesGatewayPostgres::new(Arc::new(db));
        let experience = gateway
            .update(&RecordId::from(id), ExperiencePatch::default())
            .await
            .unwrap();

        assert_eq!(experience.title, "Original");
    }

    #[tokio::test]
    async fn test_update_replaces_skills_whole() {
        let id = Uuid::new_v4();
        let mut updated = mock_experience_model(id, "Original");
        updated.skills = vec!["Arduino".to_string(), "MQTT".to_string()];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let gateway = ExperiencesGatewayPostgres::new(Arc::new(db));
        let experience = gateway
            .update(
                &RecordId::from(id),
                ExperiencePatch {
                    skills: PatchField::Value(vec!["Arduino".to_string(), "MQTT".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(experience.skills, vec!["Arduino", "MQTT"]);
    }
}
