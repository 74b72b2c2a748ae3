use std::collections::HashSet;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use patient_cell::models::PatientStore;
use psychologist_cell::models::{Availability, AvailabilityStore, PsychologistStore};
use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{Appointment, AppointmentStatus, AppointmentStore, BookAppointmentRequest};

/// Candidate start times are generated on a fixed 15-minute grid regardless
/// of the requested duration.
const SLOT_STEP_MINUTES: i64 = 15;

const MIN_DURATION_MINUTES: i32 = 15;
const MAX_DURATION_MINUTES: i32 = 180;

fn parse_date_time(date_str: &str, time_str: &str) -> Result<(NaiveDate, NaiveTime), AppError> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Date or time in invalid format"))?;
    let time = NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|_| AppError::validation("Date or time in invalid format"))?;
    Ok((date, time))
}

/// Stateless coordinator over the stores: computes free slots for a date and
/// validates and commits new bookings.
pub struct SchedulingService {
    appointments: AppointmentStore,
    patients: PatientStore,
    psychologists: PsychologistStore,
    availabilities: AvailabilityStore,
}

impl SchedulingService {
    pub fn new(
        appointments: AppointmentStore,
        patients: PatientStore,
        psychologists: PsychologistStore,
        availabilities: AvailabilityStore,
    ) -> Self {
        Self {
            appointments,
            patients,
            psychologists,
            availabilities,
        }
    }

    pub async fn get(&self, appointment_id: i64) -> Result<Appointment, AppError> {
        self.appointments
            .get(appointment_id)
            .await
            .ok_or_else(|| AppError::not_found("Appointment", appointment_id))
    }

    pub async fn list(
        &self,
        patient_id: Option<i64>,
        psychologist_id: Option<i64>,
    ) -> Vec<Appointment> {
        match (patient_id, psychologist_id) {
            (Some(patient_id), _) => {
                self.appointments
                    .filter(|a| a.patient_id == patient_id)
                    .await
            }
            (None, Some(psychologist_id)) => {
                self.appointments
                    .filter(|a| a.psychologist_id == psychologist_id)
                    .await
            }
            (None, None) => self.appointments.all().await,
        }
    }

    async fn active_windows_for(&self, psychologist_id: i64, day_of_week: u8) -> Vec<Availability> {
        self.availabilities
            .filter(|a| {
                a.psychologist_id == psychologist_id
                    && a.day_of_week == day_of_week
                    && a.is_active
            })
            .await
    }

    /// Free slot starts ("HH:MM") for a psychologist on a date. An
    /// unparsable date yields an empty list rather than an error.
    pub async fn available_slots(
        &self,
        psychologist_id: i64,
        date_str: &str,
        duration: i32,
    ) -> Vec<String> {
        let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
            return Vec::new();
        };

        let day_of_week = date.weekday().num_days_from_monday() as u8;
        let windows = self.active_windows_for(psychologist_id, day_of_week).await;
        if windows.is_empty() {
            return Vec::new();
        }

        let booked: HashSet<String> = self
            .appointments
            .filter(|a| {
                a.psychologist_id == psychologist_id
                    && a.date == date
                    && a.status != AppointmentStatus::Cancelled
            })
            .await
            .into_iter()
            .map(|a| a.time.format("%H:%M").to_string())
            .collect();

        let mut slots = Vec::new();
        for window in windows {
            let mut current = window.start_time;
            while current < window.end_time {
                let (slot_end, wrapped) =
                    current.overflowing_add_signed(Duration::minutes(duration as i64));
                if wrapped == 0 && slot_end <= window.end_time {
                    let label = current.format("%H:%M").to_string();
                    if !booked.contains(&label) {
                        slots.push(label);
                    }
                }

                let (next, wrapped) =
                    current.overflowing_add_signed(Duration::minutes(SLOT_STEP_MINUTES));
                if wrapped != 0 {
                    break;
                }
                current = next;
            }
        }

        slots.sort();
        slots
    }

    /// Books an appointment. The conflict check and the insert are a single
    /// conditional insert against the store, so racing requests for the same
    /// slot cannot both commit.
    pub async fn schedule(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        debug!(
            "Scheduling appointment for patient {} with psychologist {}",
            request.patient_id, request.psychologist_id
        );

        if self.patients.get(request.patient_id).await.is_none() {
            return Err(AppError::not_found("Patient", request.patient_id));
        }

        let psychologist = self
            .psychologists
            .get(request.psychologist_id)
            .await
            .ok_or_else(|| AppError::not_found("Psychologist", request.psychologist_id))?;
        if !psychologist.is_active {
            return Err(AppError::BusinessRule("Psychologist is inactive".to_string()));
        }

        let (date, time) = parse_date_time(&request.date, &request.time)?;

        if date < Local::now().date_naive() {
            return Err(AppError::validation_field(
                "Appointment date must not be in the past",
                "date",
            ));
        }

        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&request.duration) {
            return Err(AppError::validation_field(
                "Duration must be between 15 and 180 minutes",
                "duration",
            ));
        }

        let day_of_week = date.weekday().num_days_from_monday() as u8;
        let windows = self
            .active_windows_for(request.psychologist_id, day_of_week)
            .await;
        if windows.is_empty() {
            return Err(AppError::BusinessRule(
                "Psychologist has no availability on this day".to_string(),
            ));
        }

        // The whole appointment must fit inside one window, not just its
        // start instant.
        let fits = windows.iter().any(|window| {
            let (end, wrapped) =
                time.overflowing_add_signed(Duration::minutes(request.duration as i64));
            window.start_time <= time && wrapped == 0 && end <= window.end_time
        });
        if !fits {
            return Err(AppError::BusinessRule(
                "Requested time is outside the availability window".to_string(),
            ));
        }

        let appointment = Appointment {
            id: 0,
            patient_id: request.patient_id,
            psychologist_id: request.psychologist_id,
            date,
            time,
            duration_minutes: request.duration,
            status: AppointmentStatus::Scheduled,
            notes: request.notes,
            cancellation_reason: None,
            created_at: Utc::now(),
        };

        let psychologist_id = request.psychologist_id;
        let appointment = self
            .appointments
            .add_unless(appointment, |existing| {
                existing.psychologist_id == psychologist_id
                    && existing.date == date
                    && existing.time == time
                    && existing.status != AppointmentStatus::Cancelled
            })
            .await
            .map_err(|_| {
                AppError::Conflict("An appointment is already booked at this time".to_string())
            })?;

        debug!("Appointment booked with id {}", appointment.id);

        Ok(appointment)
    }
}
