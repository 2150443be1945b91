use std::{borrow::Cow, collections::HashMap};

use serde_json::json;
use validator::{ValidationError, ValidationErrors};

use crate::{
    types::requests::{
        profile_change_request::ProfileChangeRequest,
        registration_request::CompleteRegistrationRequest,
    },
    utils::locale_utils::Messages,
    validations::{email::validate_email, member_number::validate_member_number,
        name::validate_name},
};

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

pub fn validate_registration_data(
    data: &CompleteRegistrationRequest,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(&data.name, messages) {
        errors.add("name", e);
    }
    if let Err(e) = validate_email(&data.email, messages) {
        errors.add("email", e);
    }
    if let Err(e) = validate_name(&data.bureau, messages) {
        errors.add("bureau", e);
    }
    if let Some(member_number) = &data.member_number {
        if let Err(e) = validate_member_number(member_number, messages) {
            errors.add("member_number", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_profile_change_data(
    data: &ProfileChangeRequest,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(name) = data.fields.get("name").and_then(|v| v.as_str()) {
        if let Err(e) = validate_name(name, messages) {
            errors.add("name", e);
        }
    }
    if let Some(email) = data.fields.get("email").and_then(|v| v.as_str()) {
        if let Err(e) = validate_email(email, messages) {
            errors.add("email", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
