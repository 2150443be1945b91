use actix_web::HttpResponse;
use bson::oid::ObjectId;

use crate::{
    errors::{PortalError, PortalResult},
    types::responses::api_response::{ApiResponse, ErrorDetails},
    utils::locale_utils::{Messages, Namespace},
};

pub mod audit_log_handler;
pub mod notification_handler;
pub mod outbox_handler;
pub mod person_handler;
pub mod registration_handler;
pub mod representation_handler;
pub mod review_handler;
pub mod template_handler;
pub mod training_handler;

pub(crate) fn portal_error_response(err: &PortalError) -> HttpResponse {
    HttpResponse::build(err.status_code()).json(ApiResponse::<()>::error(
        err.to_string(),
        ErrorDetails { details: None },
    ))
}

pub(crate) fn parse_object_id(raw: &str, messages: &Messages) -> PortalResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| {
        PortalError::Validation(messages.get_str(
            Namespace::Person,
            "invalid_id",
            "Invalid identifier",
        ))
    })
}

pub(crate) fn parse_draft_id(raw: &str, messages: &Messages) -> PortalResult<uuid::Uuid> {
    uuid::Uuid::parse_str(raw).map_err(|_| {
        PortalError::Validation(messages.get_str(
            Namespace::Person,
            "registration.invalid_draft_id",
            "Invalid registration draft id",
        ))
    })
}
