use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{NewProject, ProjectPatch};
use crate::modules::content::domain::entities::{
    Project, ProjectCategory, ProjectSize, RecordId,
};

// ============================================================================
// Gateway Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectsGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectsGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Project, NewProject, ProjectPatch> for ProjectsGatewayPostgres {
    async fn list(&self) -> Result<Vec<Project>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_project).collect()
    }

    async fn get(&self, id: &RecordId) -> Result<Project, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        model_to_project(row)
    }

    async fn create(&self, data: NewProject) -> Result<Project, GatewayError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            full_description: Set(data.full_description),
            image: Set(data.image),
            gallery: Set(data.gallery),
            category: Set(data.category.as_str().to_string()),
            tech: Set(data.tech),
            features: Set(data.features),
            challenges: Set(data.challenges),
            solutions: Set(data.solutions),
            github: Set(data.github),
            demo: Set(data.demo),
            featured: Set(data.featured),
            size: Set(data.size.as_str().to_string()),
            order_index: Set(data.order_index),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(row)
    }

    async fn update(&self, id: &RecordId, data: ProjectPatch) -> Result<Project, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        match data.full_description {
            PatchField::Unset => {}
            PatchField::Null => model.full_description = Set(None),
            PatchField::Value(v) => model.full_description = Set(Some(v)),
        }
        match data.image {
            PatchField::Unset => {}
            PatchField::Null => model.image = Set(None),
            PatchField::Value(v) => model.image = Set(Some(v)),
        }
        if let PatchField::Value(gallery) = data.gallery {
            model.gallery = Set(gallery);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }
        if let PatchField::Value(tech) = data.tech {
            model.tech = Set(tech);
        }
        if let PatchField::Value(features) = data.features {
            model.features = Set(features);
        }
        match data.challenges {
            PatchField::Unset => {}
            PatchField::Null => model.challenges = Set(None),
            PatchField::Value(v) => model.challenges = Set(Some(v)),
        }
        match data.solutions {
            PatchField::Unset => {}
            PatchField::Null => model.solutions = Set(None),
            PatchField::Value(v) => model.solutions = Set(Some(v)),
        }
        if let PatchField::Value(github) = data.github {
            model.github = Set(github);
        }
        if let PatchField::Value(demo) = data.demo {
            model.demo = Set(demo);
        }
        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }
        if let PatchField::Value(size) = data.size {
            model.size = Set(size.as_str().to_string());
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        model_to_project(row)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError> {
        // Non-UUID ids cannot exist in this table; deleting them is success.
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

fn model_to_project(model: projects::Model) -> Result<Project, GatewayError> {
    Ok(Project {
        id: RecordId::from(model.id),
        title: model.title,
        description: model.description,
        full_description: model.full_description,
        image: model.image,
        gallery: model.gallery,
        category: ProjectCategory::from_label(&model.category),
        tech: model.tech,
        features: model.features,
        challenges: model.challenges,
        solutions: model.solutions,
        github: model.github,
        demo: model.demo,
        featured: model.featured,
        size: ProjectSize::from_label(&model.size),
        order_index: model.order_index,
        created_at: model.created_at.into(),
    })
}

// ============================================================================
// Tests
// ============================================================================
