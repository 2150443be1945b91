use std::sync::Arc;

use bson::{doc, oid::ObjectId, to_bson};
use chrono::Utc;
use log::warn;

use crate::{
    constants::PERSON_COL_NAME,
    errors::{PortalError, PortalResult},
    models::{audit_log_model::AuditLog, person_model::Person},
    repositories::{
        audit_log_repository::AuditLogRepository, person_repository::PersonRepository,
    },
    types::{
        models::person::{
            notification_settings::NotificationSettings, person_status::PersonStatus,
        },
        requests::{profile_change_request::ProfileChangeRequest, review_request::Auditor},
    },
    utils::{
        locale_utils::{Messages, Namespace},
        validation_utils::validate_profile_change_data,
    },
};

pub struct PersonService {
    pub person_repository: Arc<PersonRepository>,
    pub audit_log_repository: Arc<AuditLogRepository>,
}

impl PersonService {
    pub fn new(
        person_repository: Arc<PersonRepository>,
        audit_log_repository: Arc<AuditLogRepository>,
    ) -> Self {
        Self {
            person_repository,
            audit_log_repository,
        }
    }

    pub async fn get_person(&self, id: &ObjectId, messages: &Messages) -> PortalResult<Person> {
        self.person_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                PortalError::NotFound(messages.get_str(
                    Namespace::Person,
                    "fetch.not_found",
                    "Person not found",
                ))
            })
    }

    pub async fn list_persons(&self) -> PortalResult<Vec<Person>> {
        Ok(self.person_repository.get_all().await?)
    }

    pub async fn find_by_email(&self, email: &str, messages: &Messages) -> PortalResult<Person> {
        self.person_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                PortalError::NotFound(messages.get_str(
                    Namespace::Person,
                    "fetch.not_found",
                    "Person not found",
                ))
            })
    }

    /// Stores a partial field snapshot for review. The live fields stay
    /// untouched until a reviewer approves the change.
    pub async fn submit_profile_change(
        &self,
        id: &ObjectId,
        change: ProfileChangeRequest,
        messages: &Messages,
    ) -> PortalResult<Person> {
        let person = self.get_person(id, messages).await?;

        if person.status != PersonStatus::Active {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Person,
                "profile.not_active",
                "Only active members can submit profile changes",
            )));
        }
        if person.has_pending_data() {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Person,
                "profile.already_pending",
                "A profile change is already awaiting review",
            )));
        }
        if change.fields.is_empty() {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Person,
                "profile.empty_change",
                "The submitted change contains no fields",
            )));
        }

        validate_profile_change_data(&change, messages)
            .map_err(|errors| PortalError::Validation(errors.to_string()))?;

        let snapshot = to_bson(&change.fields)?;
        let matched = self
            .person_repository
            .update_versioned(id, person.version, doc! { "pending_data": snapshot }, doc! {})
            .await?;
        if !matched {
            return Err(self.conflict(messages));
        }

        self.get_person(id, messages).await
    }

    pub async fn update_notification_settings(
        &self,
        id: &ObjectId,
        settings: NotificationSettings,
        messages: &Messages,
    ) -> PortalResult<Person> {
        let person = self.get_person(id, messages).await?;

        let matched = self
            .person_repository
            .update_versioned(
                id,
                person.version,
                doc! { "notification_settings": to_bson(&settings)? },
                doc! {},
            )
            .await?;
        if !matched {
            return Err(self.conflict(messages));
        }

        self.get_person(id, messages).await
    }

    /// Administrative status flip between Active and Inactive. Deletion is
    /// a separate administrative action and has no surface here.
    pub async fn set_active_status(
        &self,
        id: &ObjectId,
        target: PersonStatus,
        auditor: &Auditor,
        messages: &Messages,
    ) -> PortalResult<Person> {
        let actor_id = ObjectId::parse_str(&auditor.id).map_err(|_| {
            PortalError::Validation(messages.get_str(
                Namespace::Person,
                "invalid_id",
                "Invalid identifier",
            ))
        })?;
        let person = self.get_person(id, messages).await?;

        let allowed = matches!(
            (person.status, target),
            (PersonStatus::Active, PersonStatus::Inactive)
                | (PersonStatus::Inactive, PersonStatus::Active)
        );
        if !allowed {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Person,
                "status.invalid_transition",
                "Status can only be switched between active and inactive",
            )));
        }

        let matched = self
            .person_repository
            .update_versioned(
                id,
                person.version,
                doc! { "status": target.to_string() },
                doc! {},
            )
            .await?;
        if !matched {
            return Err(self.conflict(messages));
        }

        let audit_entry = AuditLog {
            _id: Some(ObjectId::new()),
            actor_id,
            actor_name: auditor.name.clone(),
            actor_role: auditor.role,
            actor_bureau: auditor.bureau.clone(),
            collection_name: PERSON_COL_NAME.clone(),
            document_id: *id,
            field_name: Some("status".to_string()),
            operation: "update".to_string(),
            impacted_person_id: *id,
            impacted_person_name: person.name.clone(),
            details: Some(format!("status set to {target}")),
            created_at: Utc::now(),
        };
        if let Err(err) = self.audit_log_repository.append(&audit_entry).await {
            warn!("audit log append failed for status change of {id}: {err}");
        }

        self.get_person(id, messages).await
    }

    fn conflict(&self, messages: &Messages) -> PortalError {
        PortalError::Conflict(messages.get_str(
            Namespace::Person,
            "review.conflict",
            "The person was modified concurrently; reload and retry",
        ))
    }
}
