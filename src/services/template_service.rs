use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::Utc;

use crate::{
    errors::{PortalError, PortalResult},
    models::document_template_model::DocumentTemplate,
    repositories::document_template_repository::DocumentTemplateRepository,
    types::requests::template_request::UploadTemplateRequest,
    utils::locale_utils::{Messages, Namespace},
};

pub struct TemplateService {
    pub template_repository: Arc<DocumentTemplateRepository>,
}

impl TemplateService {
    pub fn new(template_repository: Arc<DocumentTemplateRepository>) -> Self {
        Self {
            template_repository,
        }
    }

    pub async fn upload_metadata(
        &self,
        request: UploadTemplateRequest,
        messages: &Messages,
    ) -> PortalResult<DocumentTemplate> {
        if request.name.trim().is_empty() || request.object_key.trim().is_empty() {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Portal,
                "templates.invalid_metadata",
                "Template name and object key must not be empty",
            )));
        }

        let uploaded_by = ObjectId::parse_str(&request.uploaded_by).map_err(|_| {
            PortalError::Validation(messages.get_str(
                Namespace::Person,
                "invalid_id",
                "Invalid identifier",
            ))
        })?;

        let now = Utc::now();
        let template = DocumentTemplate {
            _id: Some(ObjectId::new()),
            name: request.name,
            category: request.category,
            object_key: request.object_key,
            locale: request.locale,
            uploaded_by,
            created_at: now,
            updated_at: now,
        };
        Ok(self.template_repository.create(&template).await?)
    }

    pub async fn list(
        &self,
        category: Option<&str>,
        locale: Option<&str>,
    ) -> PortalResult<Vec<DocumentTemplate>> {
        Ok(self.template_repository.list(category, locale).await?)
    }

    pub async fn get(
        &self,
        id: &ObjectId,
        messages: &Messages,
    ) -> PortalResult<DocumentTemplate> {
        self.template_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                PortalError::NotFound(messages.get_str(
                    Namespace::Portal,
                    "templates.not_found",
                    "Document template not found",
                ))
            })
    }
}
