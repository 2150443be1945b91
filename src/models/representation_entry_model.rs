use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled peer-representation span: one member covering another's
/// practice between `start` and `end`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RepresentationEntry {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub representative_id: ObjectId,

    pub represented_id: ObjectId,

    pub start: DateTime<Utc>,

    pub end: DateTime<Utc>,

    /// Derived from the span at scheduling time.
    pub hours: f64,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
