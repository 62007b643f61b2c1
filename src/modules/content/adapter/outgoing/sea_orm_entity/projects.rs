use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub full_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub gallery: Vec<String>,

    // "Web" | "IoT" | "Other"
    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub tech: Vec<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Vec<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub challenges: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub solutions: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub github: String,

    #[sea_orm(column_type = "Text")]
    pub demo: String,

    pub featured: bool,

    // "small" | "medium" | "large"
    #[sea_orm(column_type = "Text")]
    pub size: String,

    pub order_index: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
