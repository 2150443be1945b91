use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Template metadata only; the file itself lives in the external object
/// store under `object_key`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentTemplate {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub name: String,

    pub category: String,

    pub object_key: String,

    pub locale: String,

    pub uploaded_by: ObjectId,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
