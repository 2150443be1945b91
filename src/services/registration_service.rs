use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::Utc;
use log::{info, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    constants::PERSON_COL_NAME,
    errors::{PortalError, PortalResult},
    models::{audit_log_model::AuditLog, person_model::Person},
    repositories::{
        audit_log_repository::AuditLogRepository, person_repository::PersonRepository,
    },
    services::draft_store::RegistrationDraftStore,
    types::{
        models::person::defaults::default_status,
        requests::registration_request::{CompleteRegistrationRequest, SaveStepRequest},
    },
    utils::{
        locale_utils::{Messages, Namespace},
        validation_utils::validate_registration_data,
    },
};

pub struct RegistrationService {
    pub person_repository: Arc<PersonRepository>,
    pub audit_log_repository: Arc<AuditLogRepository>,
    pub drafts: Arc<RegistrationDraftStore>,
}

impl RegistrationService {
    pub fn new(
        person_repository: Arc<PersonRepository>,
        audit_log_repository: Arc<AuditLogRepository>,
        drafts: Arc<RegistrationDraftStore>,
    ) -> Self {
        Self {
            person_repository,
            audit_log_repository,
            drafts,
        }
    }

    pub fn start(&self) -> Uuid {
        let draft_id = self.drafts.start();
        info!("registration draft {draft_id} started");
        draft_id
    }

    pub fn save_step(
        &self,
        draft_id: &Uuid,
        step: SaveStepRequest,
        messages: &Messages,
    ) -> PortalResult<()> {
        if !self.drafts.save_step(draft_id, step.fields) {
            return Err(PortalError::NotFound(messages.get_str(
                Namespace::Person,
                "registration.draft_not_found",
                "Registration draft not found or expired",
            )));
        }
        Ok(())
    }

    /// Validates the assembled draft and creates the person in `Pending`
    /// state. The draft is consumed only when creation succeeds, so a
    /// validation failure leaves it editable.
    pub async fn complete(&self, draft_id: &Uuid, messages: &Messages) -> PortalResult<Person> {
        let fields = self.drafts.get(draft_id).ok_or_else(|| {
            PortalError::NotFound(messages.get_str(
                Namespace::Person,
                "registration.draft_not_found",
                "Registration draft not found or expired",
            ))
        })?;

        let assembled = Value::Object(fields.into_iter().collect());
        let data: CompleteRegistrationRequest =
            serde_json::from_value(assembled).map_err(|err| {
                PortalError::Validation(format!(
                    "{}: {err}",
                    messages.get_str(
                        Namespace::Person,
                        "registration.incomplete",
                        "Registration data is incomplete",
                    )
                ))
            })?;

        validate_registration_data(&data, messages)
            .map_err(|errors| PortalError::Validation(errors.to_string()))?;

        if self
            .person_repository
            .find_by_email(&data.email)
            .await?
            .is_some()
        {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Person,
                "create.duplicate",
                "A person with this email is already registered",
            )));
        }

        let now = Utc::now();
        let person = Person {
            _id: Some(ObjectId::new()),
            name: data.name,
            email: data.email,
            role: data.role,
            status: default_status(),
            bureau: data.bureau,
            member_number: data.member_number,
            pending_data: None,
            rejection_reason: None,
            notification_settings: data.notification_settings,
            version: 0,
            created_at: now,
            updated_at: now,
        };

        let created = self.person_repository.create(&person).await?;
        self.drafts.remove(draft_id);

        let person_id = created._id.unwrap_or_else(ObjectId::new);
        let audit_entry = AuditLog {
            _id: Some(ObjectId::new()),
            actor_id: person_id,
            actor_name: created.name.clone(),
            actor_role: created.role,
            actor_bureau: created.bureau.clone(),
            collection_name: PERSON_COL_NAME.clone(),
            document_id: person_id,
            field_name: None,
            operation: "create".to_string(),
            impacted_person_id: person_id,
            impacted_person_name: created.name.clone(),
            details: Some("registration submitted".to_string()),
            created_at: Utc::now(),
        };
        if let Err(err) = self.audit_log_repository.append(&audit_entry).await {
            warn!("audit log append failed for registration of {person_id}: {err}");
        }

        info!("registration {person_id} completed from draft {draft_id}");
        Ok(created)
    }
}
