use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Which of the two reviewable states the person was in when the decision
/// was taken. Selects the notification template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCase {
    Registration,
    DataChange,
}

impl ReviewCase {
    /// Template key under the `notification` namespace.
    pub fn template_key(&self, decision: ReviewDecision) -> &'static str {
        match (self, decision) {
            (ReviewCase::Registration, ReviewDecision::Approve) => "registration_approved",
            (ReviewCase::Registration, ReviewDecision::Reject) => "registration_rejected",
            (ReviewCase::DataChange, ReviewDecision::Approve) => "data_change_approved",
            (ReviewCase::DataChange, ReviewDecision::Reject) => "data_change_rejected",
        }
    }
}
