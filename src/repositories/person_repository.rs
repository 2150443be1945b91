use crate::constants::PERSON_COL_NAME;
use crate::{config::database::get_collection, models::person_model::Person};
use bson::{Document, oid::ObjectId, to_bson};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct PersonRepository {
    pub collection: Collection<Person>,
}

impl PersonRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*PERSON_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, person: &Person) -> Result<Person> {
        self.collection.insert_one(person).await?;
        Ok(Person { ..person.clone() })
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Person>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>> {
        self.collection.find_one(doc! { "email": email }).await
    }

    pub async fn get_all(&self) -> Result<Vec<Person>> {
        let cursor = self.collection.find(doc! {}).await?;
        let persons: Vec<Person> = cursor.try_collect().await?;
        Ok(persons)
    }

    /// Compare-and-set update: matches only when the stored `version` equals
    /// `expected_version`, and bumps the version on success. Returns whether
    /// a document matched.
    pub async fn update_versioned(
        &self,
        id: &ObjectId,
        expected_version: i64,
        set: Document,
        unset: Document,
    ) -> Result<bool> {
        let filter = doc! { "_id": id, "version": expected_version };

        let mut set = set;
        set.insert("version", expected_version + 1);
        set.insert("updated_at", to_bson(&chrono::Utc::now())?);

        let mut update = doc! { "$set": set };
        if !unset.is_empty() {
            update.insert("$unset", unset);
        }

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count == 1)
    }
}
