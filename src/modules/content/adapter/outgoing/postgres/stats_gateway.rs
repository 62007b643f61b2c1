use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::stats::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{NewStat, StatPatch};
use crate::modules::content::domain::entities::{RecordId, Stat};

#[derive(Clone)]
pub struct StatsGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Stat, NewStat, StatPatch> for StatsGatewayPostgres {
    async fn list(&self) -> Result<Vec<Stat>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_stat).collect())
    }

    async fn get(&self, id: &RecordId) -> Result<Stat, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        Ok(model_to_stat(row))
    }

    async fn create(&self, data: NewStat) -> Result<Stat, GatewayError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            value: Set(data.value.trim().to_string()),
            label: Set(data.label.trim().to_string()),
            order_index: Set(data.order_index),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_stat(row))
    }

    async fn update(&self, id: &RecordId, data: StatPatch) -> Result<Stat, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(value) = data.value {
            model.value = Set(value.trim().to_string());
        }
        if let PatchField::Value(label) = data.label {
            model.label = Set(label.trim().to_string());
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        let has_changes =
            model.value.is_set() || model.label.is_set() || model.order_index.is_set();

        if !has_changes {
            let row = Entity::find_by_id(uuid)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(GatewayError::NotFound)?;

            return Ok(model_to_stat(row));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        Ok(model_to_stat(row))
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

fn model_to_stat(model: stats::Model) -> Stat {
    Stat {
        id: RecordId::from(model.id),
        value: model.value,
        label: model.label,
        order_index: model.order_index,
    }
}
