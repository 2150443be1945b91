use actix_web::http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for every portal operation.
///
/// `NotFound`, `Validation` and `Conflict` are terminal for the request that
/// raised them; `Database` wraps a failed store call and may be retried by
/// the caller; `Configuration` means a required collaborator is missing.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PortalError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::Conflict(_) => StatusCode::CONFLICT,
            PortalError::Database(_) | PortalError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<bson::ser::Error> for PortalError {
    fn from(err: bson::ser::Error) -> Self {
        PortalError::Database(err.into())
    }
}

impl From<bson::de::Error> for PortalError {
    fn from(err: bson::de::Error) -> Self {
        PortalError::Database(err.into())
    }
}

pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            PortalError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PortalError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PortalError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            PortalError::Configuration("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
