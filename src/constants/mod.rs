use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).expect(&format!("{} must be set", var_name))
        });
    };
}

macro_rules! lazy_env_var_or {
    ($name:ident, $default:expr) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            env::var(stringify!($name)).unwrap_or_else(|_| $default.to_string())
        });
    };
}

lazy_env_var!(MONGODB_URI);
lazy_env_var!(DB_NAME);
lazy_env_var!(SERVER_ADDR);

lazy_env_var_or!(PERSON_COL_NAME, "persons");
lazy_env_var_or!(AUDIT_LOG_COL_NAME, "audit_logs");
lazy_env_var_or!(NOTIFICATION_COL_NAME, "notifications");
lazy_env_var_or!(MAIL_COL_NAME, "mail_queue");
lazy_env_var_or!(OUTBOX_COL_NAME, "outbox");
lazy_env_var_or!(TEMPLATE_COL_NAME, "document_templates");
lazy_env_var_or!(TRAINING_COL_NAME, "training_entries");
lazy_env_var_or!(REPRESENTATION_COL_NAME, "representation_entries");

/// Registration drafts are evicted after this long without completion.
pub const REGISTRATION_DRAFT_TTL_MINUTES: u64 = 60;
