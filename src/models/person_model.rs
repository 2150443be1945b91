use crate::types::models::person::{
    defaults::{default_role, default_status},
    notification_settings::NotificationSettings,
    person_status::PersonStatus,
    role::Role,
};
use bson::{Document, oid::ObjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member or applicant record.
///
/// A person is reviewable in exactly one of two states: initial registration
/// (`status == Pending`, no `pending_data`) or edit review
/// (`status == Active`, `pending_data` present). Presence of `pending_data`
/// is the sole signal that profile changes await approval.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Person {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub name: String,

    pub email: String,

    #[serde(default = "default_role")]
    pub role: Role,

    #[serde(default = "default_status")]
    pub status: PersonStatus,

    /// Regional chamber office the person belongs to.
    pub bureau: String,

    /// Chamber member number, e.g. "ZA-12345". Assigned by the bureau.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_number: Option<String>,

    /// Partial field snapshot awaiting reviewer approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_data: Option<Document>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    #[serde(default)]
    pub notification_settings: NotificationSettings,

    /// Optimistic-concurrency counter, incremented on every write.
    #[serde(default)]
    pub version: i64,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Person {
    pub fn has_pending_data(&self) -> bool {
        self.pending_data
            .as_ref()
            .is_some_and(|doc| !doc.is_empty())
    }
}
