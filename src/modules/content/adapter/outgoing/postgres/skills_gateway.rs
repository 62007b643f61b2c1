use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{NewSkill, SkillPatch};
use crate::modules::content::domain::entities::{RecordId, Skill, SkillCategory};

#[derive(Clone)]
pub struct SkillsGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillsGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Skill, NewSkill, SkillPatch> for SkillsGatewayPostgres {
    async fn list(&self) -> Result<Vec<Skill>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_skill).collect())
    }

    async fn get(&self, id: &RecordId) -> Result<Skill, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        Ok(model_to_skill(row))
    }

    async fn create(&self, data: NewSkill) -> Result<Skill, GatewayError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            level: Set(data.level),
            category: Set(data.category.as_str().to_string()),
            icon: Set(data.icon),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_skill(row))
    }

    async fn update(&self, id: &RecordId, data: SkillPatch) -> Result<Skill, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }
        if let PatchField::Value(level) = data.level {
            model.level = Set(level);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }
        if let PatchField::Value(icon) = data.icon {
            model.icon = Set(icon);
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        let has_changes = model.name.is_set()
            || model.level.is_set()
            || model.category.is_set()
            || model.icon.is_set()
            || model.order_index.is_set();

        if !has_changes {
            let row = Entity::find_by_id(uuid)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(GatewayError::NotFound)?;

            return Ok(model_to_skill(row));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        Ok(model_to_skill(row))
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

fn model_to_skill(model: skills::Model) -> Skill {
    Skill {
        id: RecordId::from(model.id),
        name: model.name,
        level: model.level,
        category: SkillCategory::from(model.category),
        icon: model.icon,
        order_index: model.order_index,
    }
}
