use bson::{Document, oid::ObjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SideEffectKind {
    AuditLog,
    InAppNotification,
    Email,
}

/// A side-effect intent recorded after a committed state mutation.
///
/// The primary mutation and its side effects are not transactional across
/// documents; recording the intent first means a crash between mutation and
/// dispatch leaves a retryable entry instead of silently dropping the
/// notification.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutboxEntry {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub kind: SideEffectKind,

    /// The serialized target document (audit log, notification or mail).
    pub payload: Document,

    #[serde(default)]
    pub attempts: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatched_at: Option<DateTime<Utc>>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
