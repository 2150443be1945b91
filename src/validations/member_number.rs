use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::utils::{locale_utils::Messages, validation_utils::add_error};

/// Chamber member numbers look like "ZA-12345" (4 to 6 digits).
static MEMBER_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ZA-\d{4,6}$").expect("member number regex is valid"));

pub fn validate_member_number(
    member_number: &str,
    messages: &Messages,
) -> Result<(), ValidationError> {
    if MEMBER_NUMBER_RE.is_match(member_number) {
        Ok(())
    } else {
        let message = messages.get_validation_message(
            "member_number.invalid",
            "Member number must look like ZA-12345",
        );
        Err(add_error("member_number.invalid", message, member_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages() -> Messages {
        Messages::from_values(json!({}), json!({}), json!({}), json!({}))
    }

    #[test]
    fn accepts_well_formed_number() {
        assert!(validate_member_number("ZA-12345", &messages()).is_ok());
    }

    #[test]
    fn rejects_wrong_prefix_and_length() {
        assert!(validate_member_number("XX-12345", &messages()).is_err());
        assert!(validate_member_number("ZA-123", &messages()).is_err());
        assert!(validate_member_number("ZA-1234567", &messages()).is_err());
    }
}
