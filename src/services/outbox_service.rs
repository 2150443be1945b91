use std::sync::Arc;

use bson::{Document, from_document, oid::ObjectId};
use chrono::Utc;
use log::warn;
use serde::Serialize;

use crate::{
    errors::PortalResult,
    models::{
        audit_log_model::AuditLog,
        mail_model::MailMessage,
        notification_model::Notification,
        outbox_model::{OutboxEntry, SideEffectKind},
    },
    repositories::{
        audit_log_repository::AuditLogRepository, mail_repository::MailRepository,
        notification_repository::NotificationRepository, outbox_repository::OutboxRepository,
    },
};

#[derive(Debug, Serialize, Default)]
pub struct DispatchReport {
    pub dispatched: usize,
    pub failed: usize,
}

/// Records side-effect intents and delivers them independently.
///
/// The primary state mutation has already been committed when intents are
/// recorded; a delivery failure leaves a retryable outbox entry instead of
/// rolling anything back.
pub struct OutboxService {
    pub outbox_repository: Arc<OutboxRepository>,
    pub audit_log_repository: Arc<AuditLogRepository>,
    pub notification_repository: Arc<NotificationRepository>,
    pub mail_repository: Arc<MailRepository>,
}

impl OutboxService {
    pub fn new(
        outbox_repository: Arc<OutboxRepository>,
        audit_log_repository: Arc<AuditLogRepository>,
        notification_repository: Arc<NotificationRepository>,
        mail_repository: Arc<MailRepository>,
    ) -> Self {
        Self {
            outbox_repository,
            audit_log_repository,
            notification_repository,
            mail_repository,
        }
    }

    /// Records each intent, then attempts delivery once. Returns the kinds
    /// that could not be delivered; those stay queued for `dispatch_pending`.
    pub async fn record_and_dispatch(
        &self,
        intents: Vec<(SideEffectKind, Document)>,
    ) -> Vec<SideEffectKind> {
        let mut failed = Vec::new();

        for (kind, payload) in intents {
            let entry = OutboxEntry {
                _id: Some(ObjectId::new()),
                kind,
                payload,
                attempts: 0,
                dispatched_at: None,
                created_at: Utc::now(),
            };

            match self.outbox_repository.record(&entry).await {
                Ok(recorded) => {
                    if let Err(err) = self.deliver(&recorded).await {
                        warn!("side effect {kind} failed, left queued for retry: {err}");
                        if let Some(id) = recorded._id {
                            if let Err(err) = self.outbox_repository.mark_failed_attempt(&id).await
                            {
                                warn!("could not record failed attempt for {kind}: {err}");
                            }
                        }
                        failed.push(kind);
                    }
                }
                Err(err) => {
                    warn!("could not record {kind} intent: {err}");
                    failed.push(kind);
                }
            }
        }

        failed
    }

    /// Re-attempts every undelivered entry once.
    pub async fn dispatch_pending(&self) -> PortalResult<DispatchReport> {
        let entries = self.outbox_repository.pending().await?;
        let mut report = DispatchReport::default();

        for entry in entries {
            match self.deliver(&entry).await {
                Ok(()) => report.dispatched += 1,
                Err(err) => {
                    warn!("outbox entry {:?} still undeliverable: {err}", entry._id);
                    if let Some(id) = entry._id {
                        if let Err(err) = self.outbox_repository.mark_failed_attempt(&id).await {
                            warn!("could not record failed attempt: {err}");
                        }
                    }
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    async fn deliver(&self, entry: &OutboxEntry) -> PortalResult<()> {
        match entry.kind {
            SideEffectKind::AuditLog => {
                let audit: AuditLog = from_document(entry.payload.clone())?;
                self.audit_log_repository.append(&audit).await?;
            }
            SideEffectKind::InAppNotification => {
                let notification: Notification = from_document(entry.payload.clone())?;
                self.notification_repository.create(&notification).await?;
            }
            SideEffectKind::Email => {
                let mail: MailMessage = from_document(entry.payload.clone())?;
                self.mail_repository.enqueue(&mail).await?;
            }
        }

        if let Some(id) = entry._id {
            self.outbox_repository.mark_dispatched(&id).await?;
        }
        Ok(())
    }
}
