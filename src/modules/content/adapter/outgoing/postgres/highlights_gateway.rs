use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::highlights::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{
    HighlightPatch, NewHighlight,
};
use crate::modules::content::domain::entities::{Highlight, RecordId};

#[derive(Clone)]
pub struct HighlightsGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl HighlightsGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Highlight, NewHighlight, HighlightPatch> for HighlightsGatewayPostgres {
    async fn list(&self) -> Result<Vec<Highlight>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_highlight).collect())
    }

    async fn get(&self, id: &RecordId) -> Result<Highlight, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        Ok(model_to_highlight(row))
    }

    async fn create(&self, data: NewHighlight) -> Result<Highlight, GatewayError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            icon: Set(data.icon),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            order_index: Set(data.order_index),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_highlight(row))
    }

    async fn update(&self, id: &RecordId, data: HighlightPatch) -> Result<Highlight, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(icon) = data.icon {
            model.icon = Set(icon);
        }
        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        let has_changes = model.icon.is_set()
            || model.title.is_set()
            || model.description.is_set()
            || model.order_index.is_set();

        if !has_changes {
            let row = Entity::find_by_id(uuid)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(GatewayError::NotFound)?;

            return Ok(model_to_highlight(row));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        Ok(model_to_highlight(row))
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

fn model_to_highlight(model: highlights::Model) -> Highlight {
    Highlight {
        id: RecordId::from(model.id),
        icon: model.icon,
        title: model.title,
        description: model.description,
        order_index: model.order_index,
    }
}
