use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Ids are the persons' hex ObjectIds.
#[derive(Debug, Deserialize)]
pub struct ScheduleRepresentationRequest {
    pub representative_id: String,
    pub represented_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
