// src/modules/content/application/ports/outgoing/content_gateway.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::entities::{Profile, RecordId};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit merge semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (with #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Merge into a required field: Null behaves like Unset because the
    /// column cannot be cleared.
    pub fn apply_to(self, slot: &mut T) {
        if let PatchField::Value(v) = self {
            *slot = v;
        }
    }

    /// Merge into a nullable field.
    pub fn apply_to_option(self, slot: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = None,
            PatchField::Value(v) => *slot = Some(v),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Row doesn't exist (or the id is not valid for the backing table).
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

/// Thin typed client over one logical table of the hosted backend.
///
/// `R` is the persisted record, `N` the create payload (server assigns id
/// and creation timestamp), `P` the merge-patch payload.
#[async_trait]
pub trait CollectionGateway<R, N, P>: Send + Sync {
    /// All rows, ordered for display (order_index ascending on the hosted
    /// path, insertion order on the local path).
    async fn list(&self) -> Result<Vec<R>, GatewayError>;

    async fn get(&self, id: &RecordId) -> Result<R, GatewayError>;

    /// Returns the persisted row so callers observe generated values.
    async fn create(&self, data: N) -> Result<R, GatewayError>;

    async fn update(&self, id: &RecordId, data: P) -> Result<R, GatewayError>;

    /// Idempotent by id: deleting an absent id is success.
    async fn delete(&self, id: &RecordId) -> Result<(), GatewayError>;
}

/// Singleton access to the profile table: exactly one row is expected and
/// updates merge into it, never creating a second.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    async fn get(&self) -> Result<Profile, GatewayError>;

    async fn update(&self, data: super::records::ProfilePatch) -> Result<Profile, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        field: PatchField<String>,
    }

    #[test]
    fn test_omitted_field_is_unset() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.field.is_unset());
    }

    #[test]
    fn test_null_field_is_null() {
        let probe: Probe = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert!(probe.field.is_null());
    }

    #[test]
    fn test_value_field_is_value() {
        let probe: Probe = serde_json::from_str(r#"{"field": "x"}"#).unwrap();
        assert_eq!(probe.field.as_value().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_apply_to_ignores_null_on_required_field() {
        let mut slot = "keep".to_string();
        PatchField::Null.apply_to(&mut slot);
        assert_eq!(slot, "keep");

        PatchField::Value("new".to_string()).apply_to(&mut slot);
        assert_eq!(slot, "new");
    }

    #[test]
    fn test_apply_to_option_clears_on_null() {
        let mut slot = Some("old".to_string());
        PatchField::<String>::Null.apply_to_option(&mut slot);
        assert!(slot.is_none());

        PatchField::Value("new".to_string()).apply_to_option(&mut slot);
        assert_eq!(slot.as_deref(), Some("new"));
    }
}
