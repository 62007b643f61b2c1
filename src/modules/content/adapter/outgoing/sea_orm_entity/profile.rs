use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    // Array of rotating role labels, stored as JSONB
    #[sea_orm(column_type = "JsonBinary")]
    pub role: Vec<String>,

    #[sea_orm(column_type = "Text")]
    pub semester: String,

    #[sea_orm(column_type = "Text")]
    pub university: String,

    #[sea_orm(column_type = "Text")]
    pub year: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub bio: Vec<String>,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    // URL or inline data URL
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar: Option<String>,

    // Platform key -> URL map, stored as JSONB
    #[sea_orm(column_type = "JsonBinary")]
    pub social: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
