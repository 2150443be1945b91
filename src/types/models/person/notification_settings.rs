use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct NotificationSettings {
    #[serde(default = "default_on")]
    pub in_app: bool,

    #[serde(default = "default_on")]
    pub email: bool,
}

fn default_on() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            in_app: true,
            email: true,
        }
    }
}
