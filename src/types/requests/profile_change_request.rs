use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Partial field snapshot an active member submits for review. Fields go
/// live only after a reviewer approves them.
#[derive(Debug, Deserialize)]
pub struct ProfileChangeRequest {
    pub fields: HashMap<String, Value>,
}
