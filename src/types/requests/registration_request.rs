use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::types::models::person::{
    defaults::default_role, notification_settings::NotificationSettings, role::Role,
};

/// One step of the multi-step registration form. Fields accumulate in the
/// draft until `complete` is called.
#[derive(Debug, Deserialize)]
pub struct SaveStepRequest {
    pub fields: HashMap<String, Value>,
}

/// The assembled registration, deserialized from the accumulated draft
/// fields when the final step is submitted.
#[derive(Debug, Deserialize)]
pub struct CompleteRegistrationRequest {
    pub name: String,

    pub email: String,

    pub bureau: String,

    #[serde(default)]
    pub member_number: Option<String>,

    #[serde(default = "default_role")]
    pub role: Role,

    #[serde(default)]
    pub notification_settings: NotificationSettings,
}
