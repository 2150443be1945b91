use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the mail-trigger collection. An external mail processor
/// drains this collection asynchronously; from the portal's perspective a
/// queued message is fire-and-forget.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MailMessage {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub to: Vec<String>,

    pub subject: String,

    pub html_body: String,

    #[serde(default = "Utc::now")]
    pub queued_at: DateTime<Utc>,
}
