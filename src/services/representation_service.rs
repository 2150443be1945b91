use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::Utc;

use crate::{
    errors::{PortalError, PortalResult},
    models::representation_entry_model::RepresentationEntry,
    repositories::{
        person_repository::PersonRepository,
        representation_repository::RepresentationRepository,
    },
    types::requests::representation_request::ScheduleRepresentationRequest,
    utils::locale_utils::{Messages, Namespace},
};

/// Total representation hours a member has covered for peers.
pub fn total_hours(entries: &[RepresentationEntry]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

pub struct RepresentationService {
    pub representation_repository: Arc<RepresentationRepository>,
    pub person_repository: Arc<PersonRepository>,
}

impl RepresentationService {
    pub fn new(
        representation_repository: Arc<RepresentationRepository>,
        person_repository: Arc<PersonRepository>,
    ) -> Self {
        Self {
            representation_repository,
            person_repository,
        }
    }

    pub async fn schedule(
        &self,
        request: ScheduleRepresentationRequest,
        messages: &Messages,
    ) -> PortalResult<RepresentationEntry> {
        if request.end <= request.start {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Portal,
                "representation.invalid_span",
                "The representation span must end after it starts",
            )));
        }
        let invalid_id = || {
            PortalError::Validation(messages.get_str(
                Namespace::Person,
                "invalid_id",
                "Invalid identifier",
            ))
        };
        let representative_id =
            ObjectId::parse_str(&request.representative_id).map_err(|_| invalid_id())?;
        let represented_id =
            ObjectId::parse_str(&request.represented_id).map_err(|_| invalid_id())?;
        if representative_id == represented_id {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Portal,
                "representation.self_representation",
                "A member cannot represent themselves",
            )));
        }

        for person_id in [&representative_id, &represented_id] {
            if self.person_repository.find_by_id(person_id).await?.is_none() {
                return Err(PortalError::NotFound(messages.get_str(
                    Namespace::Person,
                    "fetch.not_found",
                    "Person not found",
                )));
            }
        }

        let hours = (request.end - request.start).num_minutes() as f64 / 60.0;
        let entry = RepresentationEntry {
            _id: Some(ObjectId::new()),
            representative_id,
            represented_id,
            start: request.start,
            end: request.end,
            hours,
            created_at: Utc::now(),
        };
        Ok(self.representation_repository.create(&entry).await?)
    }

    pub async fn list_for_representative(
        &self,
        representative_id: &ObjectId,
    ) -> PortalResult<Vec<RepresentationEntry>> {
        Ok(self
            .representation_repository
            .list_for_representative(representative_id)
            .await?)
    }

    pub async fn total_hours_for(&self, representative_id: &ObjectId) -> PortalResult<f64> {
        let entries = self
            .representation_repository
            .list_for_representative(representative_id)
            .await?;
        Ok(total_hours(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(hours: f64) -> RepresentationEntry {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap();
        RepresentationEntry {
            _id: None,
            representative_id: ObjectId::new(),
            represented_id: ObjectId::new(),
            start,
            end: start + chrono::Duration::minutes((hours * 60.0) as i64),
            hours,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn hours_sum_across_entries() {
        let entries = vec![entry(8.0), entry(4.5)];
        assert!((total_hours(&entries) - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn no_entries_means_zero_hours() {
        assert_eq!(total_hours(&[]), 0.0);
    }
}
