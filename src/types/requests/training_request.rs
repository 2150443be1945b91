use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecordTrainingRequest {
    pub course_title: String,
    pub points: u32,
    pub completed_at: DateTime<Utc>,
}
