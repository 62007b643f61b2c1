use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::education::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{
    EducationPatch, NewEducation,
};
use crate::modules::content::domain::entities::{Education, RecordId};

#[derive(Clone)]
pub struct EducationGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Education, NewEducation, EducationPatch> for EducationGatewayPostgres {
    async fn list(&self) -> Result<Vec<Education>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_education).collect())
    }

    async fn get(&self, id: &RecordId) -> Result<Education, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        Ok(model_to_education(row))
    }

    async fn create(&self, data: NewEducation) -> Result<Education, GatewayError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(data.degree.trim().to_string()),
            institution: Set(data.institution),
            period: Set(data.period),
            description: Set(data.description),
            achievements: Set(data.achievements),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_education(row))
    }

    async fn update(&self, id: &RecordId, data: EducationPatch) -> Result<Education, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(degree) = data.degree {
            model.degree = Set(degree.trim().to_string());
        }
        if let PatchField::Value(institution) = data.institution {
            model.institution = Set(institution);
        }
        if let PatchField::Value(period) = data.period {
            model.period = Set(period);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(achievements) = data.achievements {
            model.achievements = Set(achievements);
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        let has_changes = model.degree.is_set()
            || model.institution.is_set()
            || model.period.is_set()
            || model.description.is_set()
            || model.achievements.is_set()
            || model.order_index.is_set();

        if !has_changes {
            let row = Entity::find_by_id(uuid)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(GatewayError::NotFound)?;

            return Ok(model_to_education(row));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        Ok(model_to_education(row))
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

fn model_to_education(model: education::Model) -> Education {
    Education {
        id: RecordId::from(model.id),
        degree: model.degree,
        institution: model.institution,
        period: model.period,
        description: model.description,
        achievements: model.achievements,
        order_index: model.order_index,
        created_at: model.created_at.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_education_model(id: Uuid, degree: &str) -> education::Model {
        education::Model {
            id,
            degree: degree.to_string(),
            institution: "Universitas Indonesia".to_string(),
            period: "2022 - Present".to_string(),
            description: "Web and IoT focus".to_string(),
            achievements: vec!["IPK 3.75".to_string()],
            order_index: 0,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_create_education_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_education_model(id, "S1 Ilmu Komputer")]])
            .into_connection();

        let gateway = EducationGatewayPostgres::new(Arc::new(db));
        let education = gateway
            .create(NewEducation {
                degree: "S1 Ilmu Komputer".to_string(),
                institution: "Universitas Indonesia".to_string(),
                period: "2022 - Present".to_string(),
                description: "Web and IoT focus".to_string(),
                achievements: vec!["IPK 3.75".to_string()],
                order_index: 0,
            })
            .await
            .unwrap();

        assert_eq!(education.degree, "S1 Ilmu Komputer");
        assert_eq!(education.achievements, vec!["IPK 3.75"]);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<education::Model>::new()])
            .into_connection();

        let gateway = EducationGatewayPostgres::new(Arc::new(db));
        let result = gateway
            .update(
                &RecordId::from(Uuid::new_v4()),
                EducationPatch {
                    degree: PatchField::Value("x".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), GatewayError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let gateway = EducationGatewayPostgres::new(Arc::new(db));
        assert!(gateway.delete(&RecordId::from("edu1")).await.is_ok());
    }
}
