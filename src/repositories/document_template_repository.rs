use crate::constants::TEMPLATE_COL_NAME;
use crate::{config::database::get_collection, models::document_template_model::DocumentTemplate};
use bson::{Document, oid::ObjectId};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct DocumentTemplateRepository {
    pub collection: Collection<DocumentTemplate>,
}

impl DocumentTemplateRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*TEMPLATE_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, template: &DocumentTemplate) -> Result<DocumentTemplate> {
        self.collection.insert_one(template).await?;
        Ok(DocumentTemplate { ..template.clone() })
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<DocumentTemplate>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn list(
        &self,
        category: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Vec<DocumentTemplate>> {
        let mut filter = Document::new();
        if let Some(category) = category {
            filter.insert("category", category);
        }
        if let Some(locale) = locale {
            filter.insert("locale", locale);
        }

        let cursor = self.collection.find(filter).sort(doc! { "name": 1 }).await?;
        let templates: Vec<DocumentTemplate> = cursor.try_collect().await?;
        Ok(templates)
    }
}
