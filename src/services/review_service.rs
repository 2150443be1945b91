use std::sync::Arc;

use bson::{Document, doc, oid::ObjectId, to_document};
use chrono::Utc;
use log::info;
use serde::Serialize;

use crate::{
    constants::PERSON_COL_NAME,
    errors::{PortalError, PortalResult},
    models::{
        audit_log_model::AuditLog, mail_model::MailMessage, notification_model::Notification,
        outbox_model::SideEffectKind, person_model::Person,
    },
    repositories::person_repository::PersonRepository,
    services::outbox_service::OutboxService,
    types::{
        models::person::{
            person_status::PersonStatus,
            review::{ReviewCase, ReviewDecision},
        },
        requests::review_request::Auditor,
    },
    utils::locale_utils::{Messages, Namespace},
};

/// The computed next state for a reviewable person: fields to set, fields
/// to clear, and which template family the side effects draw from.
#[derive(Debug)]
pub struct ReviewTransition {
    pub case: ReviewCase,
    pub set: Document,
    pub unset: Document,
}

/// Decides the state transition for a review without touching the store.
///
/// A person is reviewable in exactly one of two states: initial
/// registration (`Pending`, no pending data) or edit review (`Active` with
/// pending data). Anything else is a terminal validation failure.
pub fn plan_review(
    person: &Person,
    decision: ReviewDecision,
    rejection_reason: Option<&str>,
    messages: &Messages,
) -> PortalResult<ReviewTransition> {
    if person.status == PersonStatus::Pending && !person.has_pending_data() {
        let mut set = Document::new();
        match decision {
            ReviewDecision::Approve => {
                set.insert("status", PersonStatus::Active.to_string());
            }
            ReviewDecision::Reject => {
                set.insert("status", PersonStatus::Rejected.to_string());
                if let Some(reason) = rejection_reason {
                    set.insert("rejection_reason", reason);
                }
            }
        }
        return Ok(ReviewTransition {
            case: ReviewCase::Registration,
            set,
            unset: Document::new(),
        });
    }

    if person.status == PersonStatus::Active && person.has_pending_data() {
        let set = match decision {
            // Every pending key goes live at top level.
            ReviewDecision::Approve => person.pending_data.clone().unwrap_or_default(),
            // Discarded without touching the live fields.
            ReviewDecision::Reject => Document::new(),
        };
        return Ok(ReviewTransition {
            case: ReviewCase::DataChange,
            set,
            unset: doc! { "pending_data": "" },
        });
    }

    Err(PortalError::Validation(messages.get_str(
        Namespace::Person,
        "review.nothing_pending",
        "No pending changes to review",
    )))
}

/// Builds the side-effect intents for a committed review transition: always
/// one audit-log entry, plus notification and email gated by the person's
/// notification settings.
pub fn build_side_effects(
    person: &Person,
    person_id: &ObjectId,
    actor_id: ObjectId,
    auditor: &Auditor,
    decision: ReviewDecision,
    case: ReviewCase,
    messages: &Messages,
) -> PortalResult<Vec<(SideEffectKind, Document)>> {
    let template_key = case.template_key(decision);
    let params = [
        ("targetName", person.name.as_str()),
        ("actorName", auditor.name.as_str()),
    ];

    let mut intents = Vec::new();

    let audit_entry = AuditLog {
        _id: Some(ObjectId::new()),
        actor_id,
        actor_name: auditor.name.clone(),
        actor_role: auditor.role,
        actor_bureau: auditor.bureau.clone(),
        collection_name: PERSON_COL_NAME.clone(),
        document_id: *person_id,
        field_name: match case {
            ReviewCase::Registration => None,
            ReviewCase::DataChange => Some("pending_data".to_string()),
        },
        operation: "update".to_string(),
        impacted_person_id: *person_id,
        impacted_person_name: person.name.clone(),
        details: Some(format!("review decision: {decision}")),
        created_at: Utc::now(),
    };
    intents.push((SideEffectKind::AuditLog, to_document(&audit_entry)?));

    if person.notification_settings.in_app {
        let notification = Notification {
            _id: Some(ObjectId::new()),
            user_id: *person_id,
            message: messages.render(
                Namespace::Notification,
                &format!("{template_key}.message"),
                "Your submission has been reviewed",
                &params,
            ),
            link: messages.get_str(
                Namespace::Notification,
                &format!("{template_key}.link"),
                "/profile",
            ),
            is_read: false,
            created_at: Utc::now(),
        };
        intents.push((
            SideEffectKind::InAppNotification,
            to_document(&notification)?,
        ));
    }

    if person.notification_settings.email {
        let mail = MailMessage {
            _id: Some(ObjectId::new()),
            to: vec![person.email.clone()],
            subject: messages.render(
                Namespace::Notification,
                &format!("{template_key}.email_subject"),
                "Your submission has been reviewed",
                &params,
            ),
            html_body: messages.render(
                Namespace::Notification,
                &format!("{template_key}.email_body"),
                "Your submission has been reviewed.",
                &params,
            ),
            queued_at: Utc::now(),
        };
        intents.push((SideEffectKind::Email, to_document(&mail)?));
    }

    Ok(intents)
}

/// What the caller gets back: the committed person state plus any side
/// effects that could not be delivered (the mutation itself stands).
#[derive(Debug, Serialize)]
pub struct ReviewOutcome {
    pub person: Person,
    pub failed_effects: Vec<SideEffectKind>,
}

/// Person reads and the versioned write the review path needs.
pub trait PersonStore {
    async fn find_by_id(&self, id: &ObjectId) -> PortalResult<Option<Person>>;
    async fn update_versioned(
        &self,
        id: &ObjectId,
        expected_version: i64,
        set: Document,
        unset: Document,
    ) -> PortalResult<bool>;
}

impl PersonStore for Arc<PersonRepository> {
    async fn find_by_id(&self, id: &ObjectId) -> PortalResult<Option<Person>> {
        Ok(PersonRepository::find_by_id(self, id).await?)
    }

    async fn update_versioned(
        &self,
        id: &ObjectId,
        expected_version: i64,
        set: Document,
        unset: Document,
    ) -> PortalResult<bool> {
        Ok(PersonRepository::update_versioned(self, id, expected_version, set, unset).await?)
    }
}

/// Destination for side-effect intents; returns the kinds left undelivered.
pub trait SideEffectSink {
    async fn record_and_dispatch(
        &self,
        intents: Vec<(SideEffectKind, Document)>,
    ) -> Vec<SideEffectKind>;
}

impl SideEffectSink for Arc<OutboxService> {
    async fn record_and_dispatch(
        &self,
        intents: Vec<(SideEffectKind, Document)>,
    ) -> Vec<SideEffectKind> {
        OutboxService::record_and_dispatch(self, intents).await
    }
}

pub struct ReviewService<S = Arc<PersonRepository>, O = Arc<OutboxService>> {
    pub person_store: S,
    pub outbox: O,
}

impl<S: PersonStore, O: SideEffectSink> ReviewService<S, O> {
    pub fn new(person_store: S, outbox: O) -> Self {
        Self {
            person_store,
            outbox,
        }
    }

    /// Reviews a pending registration or a pending profile edit.
    ///
    /// `expected_version` must be the version the reviewer read; a stale
    /// value fails with Conflict and nothing is written. Side-effect
    /// failures never roll back the committed mutation; they come back in
    /// `failed_effects`.
    pub async fn review(
        &self,
        person_id: &ObjectId,
        decision: ReviewDecision,
        rejection_reason: Option<&str>,
        expected_version: i64,
        auditor: &Auditor,
        messages: &Messages,
    ) -> PortalResult<ReviewOutcome> {
        let actor_id = ObjectId::parse_str(&auditor.id).map_err(|_| {
            PortalError::Validation(messages.get_str(
                Namespace::Person,
                "invalid_id",
                "Invalid identifier",
            ))
        })?;

        let person = self
            .person_store
            .find_by_id(person_id)
            .await?
            .ok_or_else(|| {
                PortalError::NotFound(messages.get_str(
                    Namespace::Person,
                    "fetch.not_found",
                    "Person not found",
                ))
            })?;

        let transition = plan_review(&person, decision, rejection_reason, messages)?;

        let matched = self
            .person_store
            .update_versioned(person_id, expected_version, transition.set, transition.unset)
            .await?;
        if !matched {
            return Err(PortalError::Conflict(messages.get_str(
                Namespace::Person,
                "review.conflict",
                "The person was modified by another review; reload and retry",
            )));
        }

        info!(
            "review committed: person={} decision={} case={:?} by {}",
            person_id, decision, transition.case, auditor.name
        );

        let updated = self
            .person_store
            .find_by_id(person_id)
            .await?
            .unwrap_or(person);

        let intents = build_side_effects(
            &updated,
            person_id,
            actor_id,
            auditor,
            decision,
            transition.case,
            messages,
        )?;
        let failed_effects = self.outbox.record_and_dispatch(intents).await;

        Ok(ReviewOutcome {
            person: updated,
            failed_effects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::models::person::{
        notification_settings::NotificationSettings, role::Role,
    };
    use serde_json::json;

    fn messages() -> Messages {
        Messages::from_values(json!({}), json!({}), json!({}), json!({}))
    }

    fn person(status: PersonStatus, pending_data: Option<Document>) -> Person {
        Person {
            _id: Some(ObjectId::new()),
            name: "Dr. Huber".to_string(),
            email: "huber@praxis.at".to_string(),
            role: Role::Member,
            status,
            bureau: "Wien".to_string(),
            member_number: Some("ZA-12345".to_string()),
            pending_data,
            rejection_reason: None,
            notification_settings: NotificationSettings::default(),
            version: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn auditor() -> Auditor {
        Auditor {
            id: ObjectId::new().to_hex(),
            name: "A. Steiner".to_string(),
            role: Role::ChamberStaff,
            bureau: "Wien".to_string(),
        }
    }

    #[test]
    fn pending_approve_activates() {
        let person = person(PersonStatus::Pending, None);
        let transition =
            plan_review(&person, ReviewDecision::Approve, None, &messages()).unwrap();

        assert_eq!(transition.case, ReviewCase::Registration);
        assert_eq!(transition.set.get_str("status").unwrap(), "active");
        assert!(transition.unset.is_empty());
    }

    #[test]
    fn pending_reject_stores_reason() {
        let person = person(PersonStatus::Pending, None);
        let transition = plan_review(
            &person,
            ReviewDecision::Reject,
            Some("incomplete credentials"),
            &messages(),
        )
        .unwrap();

        assert_eq!(transition.set.get_str("status").unwrap(), "rejected");
        assert_eq!(
            transition.set.get_str("rejection_reason").unwrap(),
            "incomplete credentials"
        );
    }

    #[test]
    fn edit_approve_merges_pending_keys_and_clears_snapshot() {
        let pending = doc! { "city": "Graz", "phone": "+43 316 1234" };
        let person = person(PersonStatus::Active, Some(pending));
        let transition =
            plan_review(&person, ReviewDecision::Approve, None, &messages()).unwrap();

        assert_eq!(transition.case, ReviewCase::DataChange);
        assert_eq!(transition.set.get_str("city").unwrap(), "Graz");
        assert_eq!(transition.set.get_str("phone").unwrap(), "+43 316 1234");
        assert!(transition.unset.contains_key("pending_data"));
    }

    #[test]
    fn edit_reject_discards_pending_without_touching_fields() {
        let person = person(PersonStatus::Active, Some(doc! { "city": "Graz" }));
        let transition =
            plan_review(&person, ReviewDecision::Reject, None, &messages()).unwrap();

        assert!(transition.set.is_empty());
        assert!(transition.unset.contains_key("pending_data"));
    }

    #[test]
    fn active_without_pending_data_is_not_reviewable() {
        let person = person(PersonStatus::Active, None);
        let err = plan_review(&person, ReviewDecision::Approve, None, &messages()).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn empty_pending_snapshot_counts_as_absent() {
        let person = person(PersonStatus::Active, Some(Document::new()));
        let err = plan_review(&person, ReviewDecision::Reject, None, &messages()).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn rejected_person_is_terminal() {
        let person = person(PersonStatus::Rejected, None);
        let err = plan_review(&person, ReviewDecision::Approve, None, &messages()).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn side_effects_always_include_one_audit_entry() {
        let person = person(PersonStatus::Pending, None);
        let id = person._id.unwrap();
        let intents = build_side_effects(
            &person,
            &id,
            ObjectId::new(),
            &auditor(),
            ReviewDecision::Approve,
            ReviewCase::Registration,
            &messages(),
        )
        .unwrap();

        let audit_count = intents
            .iter()
            .filter(|(kind, _)| *kind == SideEffectKind::AuditLog)
            .count();
        assert_eq!(audit_count, 1);

        let (_, audit) = &intents[0];
        assert_eq!(audit.get_str("operation").unwrap(), "update");
        assert_eq!(
            audit.get_object_id("impacted_person_id").unwrap(),
            id
        );
    }

    #[test]
    fn notification_and_email_follow_settings() {
        let mut person = person(PersonStatus::Pending, None);
        person.notification_settings = NotificationSettings {
            in_app: false,
            email: false,
        };
        let id = person._id.unwrap();
        let intents = build_side_effects(
            &person,
            &id,
            ObjectId::new(),
            &auditor(),
            ReviewDecision::Approve,
            ReviewCase::Registration,
            &messages(),
        )
        .unwrap();

        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].0, SideEffectKind::AuditLog);
    }

    #[test]
    fn email_intent_carries_rendered_templates() {
        let messages = Messages::from_values(
            json!({}),
            json!({}),
            json!({
                "registration_approved": {
                    "message": "Willkommen, {targetName}!",
                    "email_subject": "Registrierung bestätigt",
                    "email_body": "<p>{targetName}, geprüft von {actorName}.</p>",
                    "link": "/profil"
                }
            }),
            json!({}),
        );
        let person = person(PersonStatus::Pending, None);
        let id = person._id.unwrap();
        let intents = build_side_effects(
            &person,
            &id,
            ObjectId::new(),
            &auditor(),
            ReviewDecision::Approve,
            ReviewCase::Registration,
            &messages,
        )
        .unwrap();

        assert_eq!(intents.len(), 3);
        let (_, notification) = &intents[1];
        assert_eq!(
            notification.get_str("message").unwrap(),
            "Willkommen, Dr. Huber!"
        );
        assert_eq!(notification.get_str("link").unwrap(), "/profil");

        let (_, mail) = &intents[2];
        assert_eq!(
            mail.get_str("html_body").unwrap(),
            "<p>Dr. Huber, geprüft von A. Steiner.</p>"
        );
        assert_eq!(
            mail.get_array("to").unwrap()[0].as_str().unwrap(),
            "huber@praxis.at"
        );
    }

    struct StubStore {
        person: Option<Person>,
        matched: bool,
    }

    impl PersonStore for StubStore {
        async fn find_by_id(&self, _id: &ObjectId) -> PortalResult<Option<Person>> {
            Ok(self.person.clone())
        }

        async fn update_versioned(
            &self,
            _id: &ObjectId,
            _expected_version: i64,
            _set: Document,
            _unset: Document,
        ) -> PortalResult<bool> {
            Ok(self.matched)
        }
    }

    struct StubSink {
        undeliverable: Vec<SideEffectKind>,
    }

    impl SideEffectSink for StubSink {
        async fn record_and_dispatch(
            &self,
            intents: Vec<(SideEffectKind, Document)>,
        ) -> Vec<SideEffectKind> {
            intents
                .into_iter()
                .map(|(kind, _)| kind)
                .filter(|kind| self.undeliverable.contains(kind))
                .collect()
        }
    }

    fn service(person: Option<Person>, matched: bool) -> ReviewService<StubStore, StubSink> {
        ReviewService::new(
            StubStore { person, matched },
            StubSink {
                undeliverable: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn unknown_person_is_not_found() {
        let service = service(None, true);
        let err = service
            .review(
                &ObjectId::new(),
                ReviewDecision::Approve,
                None,
                0,
                &auditor(),
                &messages(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[tokio::test]
    async fn stale_version_is_a_conflict() {
        let person = person(PersonStatus::Pending, None);
        let id = person._id.unwrap();
        let service = service(Some(person), false);
        let err = service
            .review(
                &id,
                ReviewDecision::Approve,
                None,
                2,
                &auditor(),
                &messages(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::Conflict(_)));
    }

    #[tokio::test]
    async fn undelivered_side_effects_are_reported() {
        let person = person(PersonStatus::Pending, None);
        let id = person._id.unwrap();
        let service = ReviewService::new(
            StubStore {
                person: Some(person),
                matched: true,
            },
            StubSink {
                undeliverable: vec![SideEffectKind::Email],
            },
        );

        let outcome = service
            .review(
                &id,
                ReviewDecision::Approve,
                None,
                3,
                &auditor(),
                &messages(),
            )
            .await
            .unwrap();
        assert_eq!(outcome.failed_effects, vec![SideEffectKind::Email]);
    }
}
