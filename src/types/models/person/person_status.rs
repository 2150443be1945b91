use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Exactly one status holds at any time; `Pending` means awaiting first
/// approval after registration.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PersonStatus {
    Pending,
    Active,
    Inactive,
    Rejected,
}
