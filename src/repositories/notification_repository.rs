use crate::constants::NOTIFICATION_COL_NAME;
use crate::{config::database::get_collection, models::notification_model::Notification};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct NotificationRepository {
    pub collection: Collection<Notification>,
}

impl NotificationRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*NOTIFICATION_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, notification: &Notification) -> Result<Notification> {
        self.collection.insert_one(notification).await?;
        Ok(Notification { ..notification.clone() })
    }

    pub async fn list_for_user(&self, user_id: &ObjectId) -> Result<Vec<Notification>> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        let notifications: Vec<Notification> = cursor.try_collect().await?;
        Ok(notifications)
    }

    /// The only permitted mutation on a notification.
    pub async fn mark_read(&self, id: &ObjectId) -> Result<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "is_read": true } })
            .await?;
        Ok(result.matched_count == 1)
    }
}
