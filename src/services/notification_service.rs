use std::sync::Arc;

use bson::oid::ObjectId;

use crate::{
    errors::{PortalError, PortalResult},
    models::notification_model::Notification,
    repositories::notification_repository::NotificationRepository,
    utils::locale_utils::{Messages, Namespace},
};

pub struct NotificationService {
    pub notification_repository: Arc<NotificationRepository>,
}

impl NotificationService {
    pub fn new(notification_repository: Arc<NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }

    pub async fn list_for_user(&self, user_id: &ObjectId) -> PortalResult<Vec<Notification>> {
        Ok(self.notification_repository.list_for_user(user_id).await?)
    }

    pub async fn mark_read(&self, id: &ObjectId, messages: &Messages) -> PortalResult<()> {
        let matched = self.notification_repository.mark_read(id).await?;
        if !matched {
            return Err(PortalError::NotFound(messages.get_str(
                Namespace::Notification,
                "mark_read.not_found",
                "Notification not found",
            )));
        }
        Ok(())
    }
}
