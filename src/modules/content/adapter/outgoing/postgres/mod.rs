// src/modules/content/adapter/outgoing/postgres/mod.rs
//
// SeaORM gateway adapters, one per hosted table.

pub mod certificates_gateway;
pub mod education_gateway;
pub mod experiences_gateway;
pub mod highlights_gateway;
pub mod profile_gateway;
pub mod projects_gateway;
pub mod skills_gateway;
pub mod stats_gateway;

use sea_orm::DbErr;
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::content_gateway::GatewayError;
use crate::modules::content::domain::entities::RecordId;

pub(crate) fn map_db_err(e: DbErr) -> GatewayError {
    GatewayError::DatabaseError(e.to_string())
}

/// Ids minted by the local path are not UUIDs; they can never match a row
/// in these tables, so reads treat them as NotFound and deletes as no-ops.
pub(crate) fn parse_record_uuid(id: &RecordId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

pub(crate) fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, GatewayError> {
    serde_json::to_value(data).map_err(|e| GatewayError::SerializationError(e.to_string()))
}

pub(crate) fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, GatewayError> {
    serde_json::from_value(json.clone())
        .map_err(|e| GatewayError::SerializationError(e.to_string()))
}
