use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::models::person::role::Role;

/// Append-only accountability record. Created once, never mutated or
/// deleted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuditLog {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub actor_id: ObjectId,

    pub actor_name: String,

    pub actor_role: Role,

    pub actor_bureau: String,

    pub collection_name: String,

    pub document_id: ObjectId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    pub operation: String,

    pub impacted_person_id: ObjectId,

    pub impacted_person_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
