use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed continuing-education course.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrainingEntry {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub person_id: ObjectId,

    pub course_title: String,

    pub points: u32,

    pub completed_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
