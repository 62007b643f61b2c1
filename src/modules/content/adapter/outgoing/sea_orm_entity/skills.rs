use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    // 0-100 display percentage
    pub level: i32,

    // "frontend" | "backend" | "iot" | "tools" | open label
    #[sea_orm(column_type = "Text")]
    pub category: String,

    // Icon identifier, resolved by the view layer
    #[sea_orm(column_type = "Text")]
    pub icon: String,

    pub order_index: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
