use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::{Datelike, Utc};

use crate::{
    errors::{PortalError, PortalResult},
    models::training_entry_model::TrainingEntry,
    repositories::{
        person_repository::PersonRepository, training_repository::TrainingRepository,
    },
    types::requests::training_request::RecordTrainingRequest,
    utils::locale_utils::{Messages, Namespace},
};

/// Sums the continuing-education points earned in one calendar year.
pub fn sum_points_for_year(entries: &[TrainingEntry], year: i32) -> u32 {
    entries
        .iter()
        .filter(|entry| entry.completed_at.year() == year)
        .map(|entry| entry.points)
        .sum()
}

pub struct TrainingService {
    pub training_repository: Arc<TrainingRepository>,
    pub person_repository: Arc<PersonRepository>,
}

impl TrainingService {
    pub fn new(
        training_repository: Arc<TrainingRepository>,
        person_repository: Arc<PersonRepository>,
    ) -> Self {
        Self {
            training_repository,
            person_repository,
        }
    }

    pub async fn record(
        &self,
        person_id: &ObjectId,
        request: RecordTrainingRequest,
        messages: &Messages,
    ) -> PortalResult<TrainingEntry> {
        if self.person_repository.find_by_id(person_id).await?.is_none() {
            return Err(PortalError::NotFound(messages.get_str(
                Namespace::Person,
                "fetch.not_found",
                "Person not found",
            )));
        }
        if request.course_title.trim().is_empty() || request.points == 0 {
            return Err(PortalError::Validation(messages.get_str(
                Namespace::Portal,
                "training.invalid_entry",
                "A training entry needs a course title and a positive point value",
            )));
        }

        let entry = TrainingEntry {
            _id: Some(ObjectId::new()),
            person_id: *person_id,
            course_title: request.course_title,
            points: request.points,
            completed_at: request.completed_at,
            created_at: Utc::now(),
        };
        Ok(self.training_repository.create(&entry).await?)
    }

    pub async fn list_for_person(&self, person_id: &ObjectId) -> PortalResult<Vec<TrainingEntry>> {
        Ok(self.training_repository.list_for_person(person_id).await?)
    }

    pub async fn points_for_year(&self, person_id: &ObjectId, year: i32) -> PortalResult<u32> {
        let entries = self.training_repository.list_for_person(person_id).await?;
        Ok(sum_points_for_year(&entries, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(year: i32, points: u32) -> TrainingEntry {
        TrainingEntry {
            _id: None,
            person_id: ObjectId::new(),
            course_title: "Endodontie Update".to_string(),
            points,
            completed_at: Utc.with_ymd_and_hms(year, 6, 15, 9, 0, 0).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn sums_only_the_requested_year() {
        let entries = vec![entry(2025, 10), entry(2025, 5), entry(2024, 8)];
        assert_eq!(sum_points_for_year(&entries, 2025), 15);
        assert_eq!(sum_points_for_year(&entries, 2024), 8);
    }

    #[test]
    fn empty_history_sums_to_zero() {
        assert_eq!(sum_points_for_year(&[], 2025), 0);
    }
}
