pub mod defaults;
pub mod notification_settings;
pub mod person_status;
pub mod review;
pub mod role;
