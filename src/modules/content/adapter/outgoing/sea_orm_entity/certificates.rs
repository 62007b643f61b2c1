use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub issuer: String,

    // Free-text year used for grouping
    #[sea_orm(column_type = "Text")]
    pub date: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,

    pub order_index: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
