use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;
use uuid::Uuid;

struct Draft {
    fields: HashMap<String, Value>,
    created_at: Instant,
}

/// Short-lived keyed cache for multi-step registration state.
///
/// Each draft is scoped to the id issued at step one and passed explicitly
/// with every subsequent step, so concurrent applicants never share state.
/// Stale drafts are evicted lazily on access.
pub struct RegistrationDraftStore {
    ttl: Duration,
    inner: Mutex<HashMap<Uuid, Draft>>,
}

impl RegistrationDraftStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Issues a fresh draft id for step one.
    pub fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut drafts = self.inner.lock().expect("draft store lock poisoned");
        drafts.insert(
            id,
            Draft {
                fields: HashMap::new(),
                created_at: Instant::now(),
            },
        );
        id
    }

    /// Merges a step's fields into the draft. Returns false when the draft
    /// is unknown or expired.
    pub fn save_step(&self, id: &Uuid, fields: HashMap<String, Value>) -> bool {
        let mut drafts = self.inner.lock().expect("draft store lock poisoned");
        Self::evict_expired(&mut drafts, self.ttl);
        match drafts.get_mut(id) {
            Some(draft) => {
                draft.fields.extend(fields);
                true
            }
            None => false,
        }
    }

    /// Reads the accumulated fields without consuming the draft, so a failed
    /// completion attempt leaves the draft intact.
    pub fn get(&self, id: &Uuid) -> Option<HashMap<String, Value>> {
        let mut drafts = self.inner.lock().expect("draft store lock poisoned");
        Self::evict_expired(&mut drafts, self.ttl);
        drafts.get(id).map(|draft| draft.fields.clone())
    }

    pub fn remove(&self, id: &Uuid) {
        let mut drafts = self.inner.lock().expect("draft store lock poisoned");
        drafts.remove(id);
    }

    fn evict_expired(drafts: &mut HashMap<Uuid, Draft>, ttl: Duration) {
        // Strict: a zero TTL retains nothing.
        drafts.retain(|_, draft| draft.created_at.elapsed() < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn steps_accumulate_fields() {
        let store = RegistrationDraftStore::new(Duration::from_secs(60));
        let id = store.start();

        assert!(store.save_step(&id, fields(&[("name", json!("Dr. Huber"))])));
        assert!(store.save_step(&id, fields(&[("email", json!("huber@praxis.at"))])));

        let draft = store.get(&id).unwrap();
        assert_eq!(draft.get("name"), Some(&json!("Dr. Huber")));
        assert_eq!(draft.get("email"), Some(&json!("huber@praxis.at")));
    }

    #[test]
    fn later_step_overwrites_earlier_value() {
        let store = RegistrationDraftStore::new(Duration::from_secs(60));
        let id = store.start();

        store.save_step(&id, fields(&[("bureau", json!("Wien"))]));
        store.save_step(&id, fields(&[("bureau", json!("Graz"))]));

        assert_eq!(store.get(&id).unwrap().get("bureau"), Some(&json!("Graz")));
    }

    #[test]
    fn unknown_draft_is_rejected() {
        let store = RegistrationDraftStore::new(Duration::from_secs(60));
        assert!(!store.save_step(&Uuid::new_v4(), HashMap::new()));
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn expired_draft_behaves_as_absent() {
        let store = RegistrationDraftStore::new(Duration::ZERO);
        let id = store.start();
        assert!(!store.save_step(&id, HashMap::new()));
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn drafts_are_isolated_per_id() {
        let store = RegistrationDraftStore::new(Duration::from_secs(60));
        let first = store.start();
        let second = store.start();

        store.save_step(&first, fields(&[("name", json!("A"))]));
        store.save_step(&second, fields(&[("name", json!("B"))]));

        assert_eq!(store.get(&first).unwrap().get("name"), Some(&json!("A")));
        assert_eq!(store.get(&second).unwrap().get("name"), Some(&json!("B")));
    }
}
