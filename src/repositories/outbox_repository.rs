use crate::constants::OUTBOX_COL_NAME;
use crate::{config::database::get_collection, models::outbox_model::OutboxEntry};
use bson::{oid::ObjectId, to_bson};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct OutboxRepository {
    pub collection: Collection<OutboxEntry>,
}

impl OutboxRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*OUTBOX_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn record(&self, entry: &OutboxEntry) -> Result<OutboxEntry> {
        let mut entry = entry.clone();
        let result = self.collection.insert_one(&entry).await?;
        entry._id = result.inserted_id.as_object_id();
        Ok(entry)
    }

    pub async fn pending(&self) -> Result<Vec<OutboxEntry>> {
        let cursor = self
            .collection
            .find(doc! { "dispatched_at": { "$exists": false } })
            .sort(doc! { "created_at": 1 })
            .await?;
        let entries: Vec<OutboxEntry> = cursor.try_collect().await?;
        Ok(entries)
    }

    pub async fn mark_dispatched(&self, id: &ObjectId) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": { "dispatched_at": to_bson(&chrono::Utc::now())? },
                    "$inc": { "attempts": 1 },
                },
            )
            .await?;
        Ok(())
    }

    pub async fn mark_failed_attempt(&self, id: &ObjectId) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "attempts": 1 } })
            .await?;
        Ok(())
    }
}
