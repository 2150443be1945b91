pub mod audit_log_repository;
pub mod document_template_repository;
pub mod mail_repository;
pub mod notification_repository;
pub mod outbox_repository;
pub mod person_repository;
pub mod representation_repository;
pub mod training_repository;
