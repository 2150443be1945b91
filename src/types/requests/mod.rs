pub mod profile_change_request;
pub mod registration_request;
pub mod representation_request;
pub mod review_request;
pub mod template_request;
pub mod training_request;
