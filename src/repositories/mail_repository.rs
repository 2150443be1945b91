use crate::constants::MAIL_COL_NAME;
use crate::{config::database::get_collection, models::mail_model::MailMessage};
use mongodb::{Client, Collection, error::Result};

/// Writes into the mail-trigger collection; an external processor delivers.
pub struct MailRepository {
    pub collection: Collection<MailMessage>,
}

impl MailRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*MAIL_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn enqueue(&self, message: &MailMessage) -> Result<MailMessage> {
        self.collection.insert_one(message).await?;
        Ok(MailMessage { ..message.clone() })
    }
}
