use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    De,
    En,
}

impl Lang {
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "en" => Self::En,
            _ => Self::De,
        }
    }

    fn folder(&self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
        }
    }
}

fn load_message_file(lang: Lang, namespace: &str) -> Value {
    let file_path = Path::new("locales")
        .join(lang.folder())
        .join(format!("{namespace}.json"));

    match fs::read_to_string(&file_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(json) => json,
            Err(err) => {
                log::error!("Failed to parse JSON from {:?}: {}", file_path, err);
                Value::Null
            }
        },
        Err(err) => {
            log::error!("Failed to read message file {:?}: {}", file_path, err);
            Value::Null
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Namespace {
    Person,
    Validation,
    Notification,
    Portal,
}

impl Namespace {
    fn as_str(&self) -> &'static str {
        match self {
            Namespace::Person => "person",
            Namespace::Validation => "validation",
            Namespace::Notification => "notification",
            Namespace::Portal => "portal",
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub person: Value,
    pub validation: Value,
    pub notification: Value,
    pub portal: Value,
}

impl Messages {
    pub fn new(lang: Lang) -> Self {
        Self {
            person: load_message_file(lang, "person"),
            validation: load_message_file(lang, "validation"),
            notification: load_message_file(lang, "notification"),
            portal: load_message_file(lang, "portal"),
        }
    }

    /// Build a Messages directly from parsed namespace documents.
    /// Used by tests to avoid touching the filesystem.
    pub fn from_values(person: Value, validation: Value, notification: Value, portal: Value) -> Self {
        Self {
            person,
            validation,
            notification,
            portal,
        }
    }

    pub fn get(&self, namespace: Namespace, path: &str) -> Option<&Value> {
        let root = match namespace {
            Namespace::Person => &self.person,
            Namespace::Validation => &self.validation,
            Namespace::Notification => &self.notification,
            Namespace::Portal => &self.portal,
        };

        let mut current = root;
        for key in path.split('.') {
            match current.get(key) {
                Some(next) => current = next,
                None => {
                    log::debug!(
                        "Message key '{}' not found under '{}'",
                        path,
                        namespace.as_str()
                    );
                    return None;
                }
            }
        }
        Some(current)
    }

    pub fn get_str(&self, namespace: Namespace, path: &str, fallback: &str) -> String {
        self.get(namespace, path)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn get_validation_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Validation, path, fallback)
    }

    /// Resolve a template under the given namespace and substitute
    /// `{placeholder}` occurrences from `params`.
    pub fn render(
        &self,
        namespace: Namespace,
        path: &str,
        fallback: &str,
        params: &[(&str, &str)],
    ) -> String {
        let mut text = self.get_str(namespace, path, fallback);
        for (key, value) in params {
            text = text.replace(&format!("{{{key}}}"), value);
        }
        text
    }
}

pub fn get_lang(req: &actix_web::HttpRequest) -> Lang {
    req.headers()
        .get("Accept-Language")
        .and_then(|value| value.to_str().ok())
        .and_then(|header| {
            header
                .split(',')
                .next()
                .and_then(|tag| tag.split('-').next())
        })
        .map(Lang::from_code)
        .unwrap_or(Lang::De)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_messages() -> Messages {
        Messages::from_values(
            json!({ "fetch": { "not_found": "Person nicht gefunden" } }),
            json!({ "name": { "empty": "Name darf nicht leer sein" } }),
            json!({
                "registration_approved": {
                    "message": "Willkommen, {targetName}!",
                    "email_subject": "Registrierung bestätigt",
                    "email_body": "<p>{targetName}, geprüft von {actorName}.</p>"
                }
            }),
            json!({}),
        )
    }

    #[test]
    fn nested_lookup_resolves_dotted_paths() {
        let messages = sample_messages();
        assert_eq!(
            messages.get_str(Namespace::Person, "fetch.not_found", "fallback"),
            "Person nicht gefunden"
        );
        assert_eq!(
            messages.get_validation_message("name.empty", "fallback"),
            "Name darf nicht leer sein"
        );
    }

    #[test]
    fn missing_key_falls_back() {
        let messages = sample_messages();
        assert_eq!(
            messages.get_str(Namespace::Person, "fetch.missing", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn render_substitutes_placeholders() {
        let messages = sample_messages();
        let body = messages.render(
            Namespace::Notification,
            "registration_approved.email_body",
            "",
            &[("targetName", "Dr. Huber"), ("actorName", "A. Steiner")],
        );
        assert_eq!(body, "<p>Dr. Huber, geprüft von A. Steiner.</p>");
    }

    #[test]
    fn all_review_template_families_resolve_in_both_locales() {
        for lang in [Lang::De, Lang::En] {
            let messages = Messages::new(lang);
            for key in [
                "registration_approved",
                "registration_rejected",
                "data_change_approved",
                "data_change_rejected",
            ] {
                for field in ["message", "email_subject", "email_body", "link"] {
                    assert!(
                        messages
                            .get(Namespace::Notification, &format!("{key}.{field}"))
                            .and_then(Value::as_str)
                            .is_some(),
                        "missing {key}.{field} for {lang:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_language_code_defaults_to_german() {
        assert_eq!(Lang::from_code("fr"), Lang::De);
        assert_eq!(Lang::from_code("EN"), Lang::En);
    }
}
