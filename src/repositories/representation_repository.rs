use crate::constants::REPRESENTATION_COL_NAME;
use crate::{
    config::database::get_collection, models::representation_entry_model::RepresentationEntry,
};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct RepresentationRepository {
    pub collection: Collection<RepresentationEntry>,
}

impl RepresentationRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*REPRESENTATION_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, entry: &RepresentationEntry) -> Result<RepresentationEntry> {
        self.collection.insert_one(entry).await?;
        Ok(RepresentationEntry { ..entry.clone() })
    }

    pub async fn list_for_representative(
        &self,
        representative_id: &ObjectId,
    ) -> Result<Vec<RepresentationEntry>> {
        let cursor = self
            .collection
            .find(doc! { "representative_id": representative_id })
            .sort(doc! { "start": 1 })
            .await?;
        let entries: Vec<RepresentationEntry> = cursor.try_collect().await?;
        Ok(entries)
    }
}
