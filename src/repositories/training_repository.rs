use crate::constants::TRAINING_COL_NAME;
use crate::{config::database::get_collection, models::training_entry_model::TrainingEntry};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct TrainingRepository {
    pub collection: Collection<TrainingEntry>,
}

impl TrainingRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*TRAINING_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, entry: &TrainingEntry) -> Result<TrainingEntry> {
        self.collection.insert_one(entry).await?;
        Ok(TrainingEntry { ..entry.clone() })
    }

    pub async fn list_for_person(&self, person_id: &ObjectId) -> Result<Vec<TrainingEntry>> {
        let cursor = self
            .collection
            .find(doc! { "person_id": person_id })
            .sort(doc! { "completed_at": -1 })
            .await?;
        let entries: Vec<TrainingEntry> = cursor.try_collect().await?;
        Ok(entries)
    }
}
