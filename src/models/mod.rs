pub mod audit_log_model;
pub mod document_template_model;
pub mod mail_model;
pub mod notification_model;
pub mod outbox_model;
pub mod person_model;
pub mod representation_entry_model;
pub mod training_entry_model;
