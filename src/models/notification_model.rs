use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user in-app message. Only `is_read` is ever mutated after creation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub user_id: ObjectId,

    pub message: String,

    pub link: String,

    #[serde(default)]
    pub is_read: bool,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
