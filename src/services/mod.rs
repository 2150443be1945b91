pub mod audit_log_service;
pub mod draft_store;
pub mod notification_service;
pub mod outbox_service;
pub mod person_service;
pub mod registration_service;
pub mod representation_service;
pub mod review_service;
pub mod template_service;
pub mod training_service;
