use serde::Deserialize;

use crate::types::models::person::{review::ReviewDecision, role::Role};

/// Identity of the reviewer, injected by the identity-provider gateway.
/// Recorded verbatim in the audit log. The id is the person's hex ObjectId.
#[derive(Debug, Deserialize, Clone)]
pub struct Auditor {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub bureau: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub decision: ReviewDecision,

    #[serde(default)]
    pub rejection_reason: Option<String>,

    /// Person version the reviewer read; a mismatch fails with Conflict.
    pub expected_version: i64,

    pub auditor: Auditor,
}
