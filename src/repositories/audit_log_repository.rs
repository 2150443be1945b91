use crate::constants::AUDIT_LOG_COL_NAME;
use crate::{config::database::get_collection, models::audit_log_model::AuditLog};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

/// Append-only sink; no update or delete methods exist on purpose.
pub struct AuditLogRepository {
    pub collection: Collection<AuditLog>,
}

impl AuditLogRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*AUDIT_LOG_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn append(&self, entry: &AuditLog) -> Result<AuditLog> {
        self.collection.insert_one(entry).await?;
        Ok(AuditLog { ..entry.clone() })
    }

    pub async fn list_for_person(&self, person_id: &ObjectId) -> Result<Vec<AuditLog>> {
        let cursor = self
            .collection
            .find(doc! { "impacted_person_id": person_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        let entries: Vec<AuditLog> = cursor.try_collect().await?;
        Ok(entries)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<AuditLog>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;
        let entries: Vec<AuditLog> = cursor.try_collect().await?;
        Ok(entries)
    }
}
