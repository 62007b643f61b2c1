use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::postgres::{map_db_err, parse_record_uuid};
use crate::modules::content::adapter::outgoing::sea_orm_entity::certificates::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, PatchField,
};
use crate::modules::content::application::ports::outgoing::records::{
    CertificatePatch, NewCertificate,
};
use crate::modules::content::domain::entities::{Certificate, RecordId};

#[derive(Clone)]
pub struct CertificatesGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificatesGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionGateway<Certificate, NewCertificate, CertificatePatch>
    for CertificatesGatewayPostgres
{
    async fn list(&self) -> Result<Vec<Certificate>, GatewayError> {
        let rows = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_certificate).collect())
    }

    async fn get(&self, id: &RecordId) -> Result<Certificate, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let row = Entity::find_by_id(uuid)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GatewayError::NotFound)?;

        Ok(model_to_certificate(row))
    }

    async fn create(&self, data: NewCertificate) -> Result<Certificate, GatewayError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            issuer: Set(data.issuer),
            date: Set(data.date),
            image: Set(data.image),
            credential_url: Set(data.credential_url),
            order_index: Set(data.order_index),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_certificate(row))
    }

    async fn update(
        &self,
        id: &RecordId,
        data: CertificatePatch,
    ) -> Result<Certificate, GatewayError> {
        let uuid = parse_record_uuid(id).ok_or(GatewayError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }
        if let PatchField::Value(issuer) = data.issuer {
            model.issuer = Set(issuer);
        }
        if let PatchField::Value(date) = data.date {
            model.date = Set(date);
        }
        match data.image {
            PatchField::Unset => {}
            PatchField::Null => model.image = Set(None),
            PatchField::Value(v) => model.image = Set(Some(v)),
        }
        match data.credential_url {
            PatchField::Unset => {}
            PatchField::Null => model.credential_url = Set(None),
            PatchField::Value(v) => model.credential_url = Set(Some(v)),
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        let has_changes = model.name.is_set()
            || model.issuer.is_set()
            || model.date.is_set()
            || model.image.is_set()
            || model.credential_url.is_set()
            || model.order_index.is_set();

        if !has_changes {
            let row = Entity::find_by_id(uuid)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(GatewayError::NotFound)?;

            return Ok(model_to_certificate(row));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results.into_iter().next().ok_or(GatewayError::NotFound)?;

        Ok(model_to_certificate(row))
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

fn model_to_certificate(model: certificates::Model) -> Certificate {
    Certificate {
        id: RecordId::from(model.id),
        name: model.name,
        issuer: model.issuer,
        date: model.date,
        image: model.image,
        credential_url: model.credential_url,
        order_index: model.order_index,
        created_at: model.created_at.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_certificate_model(id: Uuid, name: &str, date: &str) -> certificates::Model {
        certificates::Model {
            id,
            name: name.to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: date.to_string(),
            image: None,
            credential_url: Some("https://aws.amazon.com/verification".to_string()),
            order_index: 0,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_create_certificate_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_certificate_model(
                id,
                "AWS Cloud Practitioner",
                "2024",
            )]])
            .into_connection();

        let gateway = CertificatesGatewayPostgres::new(Arc::new(db));
        let certificate = gateway
            .create(NewCertificate {
                name: "AWS Cloud Practitioner".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "2024".to_string(),
                image: None,
                credential_url: Some("https://aws.amazon.com/verification".to_string()),
                order_index: 0,
            })
            .await
            .unwrap();

        assert_eq!(certificate.date, "2024");
        assert_eq!(certificate.id, RecordId::from(id));
    }

    #[tokio::test]
    async fn test_update_clears_credential_url_on_null() {
        let id = Uuid::new_v4();
        let mut updated = mock_certificate_model(id, "AWS Cloud Practitioner", "2024");
        updated.credential_url = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let gateway = CertificatesGatewayPostgres::new(Arc::new(db));
        let certificate = gateway
            .update(
                &RecordId::from(id),
                CertificatePatch {
                    credential_url: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(certificate.credential_url.is_none());
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let gateway = CertificatesGatewayPostgres::new(Arc::new(db));
        let result = gateway.get(&RecordId::from("cert1")).await;

        assert!(matches!(result.unwrap_err(), GatewayError::NotFound));
    }
}
