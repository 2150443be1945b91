use std::sync::Arc;

use bson::oid::ObjectId;

use crate::{
    errors::PortalResult, models::audit_log_model::AuditLog,
    repositories::audit_log_repository::AuditLogRepository,
};

const DEFAULT_RECENT_LIMIT: i64 = 100;

pub struct AuditLogService {
    pub audit_log_repository: Arc<AuditLogRepository>,
}

impl AuditLogService {
    pub fn new(audit_log_repository: Arc<AuditLogRepository>) -> Self {
        Self {
            audit_log_repository,
        }
    }

    pub async fn list_for_person(&self, person_id: &ObjectId) -> PortalResult<Vec<AuditLog>> {
        Ok(self
            .audit_log_repository
            .list_for_person(person_id)
            .await?)
    }

    pub async fn list_recent(&self, limit: Option<i64>) -> PortalResult<Vec<AuditLog>> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT).clamp(1, 1000);
        Ok(self.audit_log_repository.list_recent(limit).await?)
    }
}
