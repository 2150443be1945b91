use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Uniform JSON envelope for every portal endpoint: a localized message
/// plus either a data payload or error details, never both.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            message: message.into(),
            error: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>, error: ErrorDetails) -> Self {
        ApiResponse {
            message: message.into(),
            error: Some(error),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// For endpoints whose success carries no payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        ApiResponse {
            message: message.into(),
            error: None,
            data: None,
        }
    }
}
