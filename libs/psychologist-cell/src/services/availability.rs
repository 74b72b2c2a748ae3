use chrono::NaiveTime;
use tracing::debug;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{
    Availability, AvailabilityStore, CreateAvailabilityRequest, PsychologistStore,
    UpdateAvailabilityRequest,
};

fn parse_hhmm(value: &str, field: &'static str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::validation_field("Time must be in HH:MM format", field))
}

/// Manages the recurring weekly availability windows psychologists declare.
/// Invariant kept here: active windows of the same psychologist on the same
/// day never overlap.
pub struct AvailabilityService {
    availabilities: AvailabilityStore,
    psychologists: PsychologistStore,
}

impl AvailabilityService {
    pub fn new(availabilities: AvailabilityStore, psychologists: PsychologistStore) -> Self {
        Self {
            availabilities,
            psychologists,
        }
    }

    pub async fn list_all(&self) -> Vec<Availability> {
        self.availabilities.all().await
    }

    pub async fn get(&self, availability_id: i64) -> Result<Availability, AppError> {
        self.availabilities
            .get(availability_id)
            .await
            .ok_or_else(|| AppError::not_found("Availability", availability_id))
    }

    pub async fn by_psychologist(&self, psychologist_id: i64) -> Vec<Availability> {
        self.availabilities
            .filter(|a| a.psychologist_id == psychologist_id)
            .await
    }

    pub async fn create(
        &self,
        request: CreateAvailabilityRequest,
    ) -> Result<Availability, AppError> {
        debug!(
            "Creating availability for psychologist {}",
            request.psychologist_id
        );

        if self
            .psychologists
            .get(request.psychologist_id)
            .await
            .is_none()
        {
            return Err(AppError::not_found("Psychologist", request.psychologist_id));
        }

        if !(0..=6).contains(&request.day_of_week) {
            return Err(AppError::validation_field(
                "Day of week must be between 0 (Monday) and 6 (Sunday)",
                "day_of_week",
            ));
        }
        let day_of_week = request.day_of_week as u8;

        let start_time = parse_hhmm(&request.start_time, "time")?;
        let end_time = parse_hhmm(&request.end_time, "time")?;

        if start_time >= end_time {
            return Err(AppError::validation_field(
                "Start time must be before end time",
                "start_time",
            ));
        }

        self.check_overlap(
            request.psychologist_id,
            day_of_week,
            start_time,
            end_time,
            None,
        )
        .await?;

        let availability = Availability {
            id: 0,
            psychologist_id: request.psychologist_id,
            day_of_week,
            start_time,
            end_time,
            is_active: true,
        };

        let availability = self.availabilities.add(availability).await;
        debug!("Availability created with id {}", availability.id);

        Ok(availability)
    }

    pub async fn update(
        &self,
        availability_id: i64,
        request: UpdateAvailabilityRequest,
    ) -> Result<Availability, AppError> {
        let mut availability = self.get(availability_id).await?;

        if let Some(ref start) = request.start_time {
            availability.start_time = parse_hhmm(start, "start_time")?;
        }
        if let Some(ref end) = request.end_time {
            availability.end_time = parse_hhmm(end, "end_time")?;
        }

        if availability.start_time >= availability.end_time {
            return Err(AppError::validation_field(
                "Start time must be before end time",
                "start_time",
            ));
        }

        if let Some(is_active) = request.is_active {
            availability.is_active = is_active;
        }

        // Every mutation re-validates against active siblings; an inactive
        // window cannot conflict.
        if availability.is_active {
            self.check_overlap(
                availability.psychologist_id,
                availability.day_of_week,
                availability.start_time,
                availability.end_time,
                Some(availability_id),
            )
            .await?;
        }

        self.availabilities.update(availability).await
    }

    pub async fn delete(&self, availability_id: i64) -> Result<(), AppError> {
        self.get(availability_id).await?;
        self.availabilities.delete(availability_id).await
    }

    /// Reactivating may re-introduce an overlap, so the sibling check runs
    /// again here.
    pub async fn activate(&self, availability_id: i64) -> Result<Availability, AppError> {
        let mut availability = self.get(availability_id).await?;
        availability.is_active = true;

        self.check_overlap(
            availability.psychologist_id,
            availability.day_of_week,
            availability.start_time,
            availability.end_time,
            Some(availability_id),
        )
        .await?;

        self.availabilities.update(availability).await
    }

    /// Deactivation excludes the window from scheduling and overlap checks
    /// without deleting it.
    pub async fn deactivate(&self, availability_id: i64) -> Result<Availability, AppError> {
        let mut availability = self.get(availability_id).await?;
        availability.is_active = false;
        self.availabilities.update(availability).await
    }

    // Half-open intervals [start, end) conflict when start < other.end and
    // end > other.start; touching endpoints do not.
    async fn check_overlap(
        &self,
        psychologist_id: i64,
        day_of_week: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        let siblings = self
            .availabilities
            .filter(|a| {
                a.psychologist_id == psychologist_id
                    && a.day_of_week == day_of_week
                    && a.is_active
                    && Some(a.id) != exclude_id
            })
            .await;

        for other in siblings {
            if start_time < other.end_time && end_time > other.start_time {
                return Err(AppError::Conflict(format!(
                    "Availability already exists on this day from {} to {}",
                    other.start_time.format("%H:%M"),
                    other.end_time.format("%H:%M"),
                )));
            }
        }

        Ok(())
    }
}
