use tracing::debug;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{Appointment, AppointmentStatus, AppointmentStore};

/// Drives an appointment through its status machine:
/// scheduled -> {confirmed, completed, cancelled},
/// confirmed -> {completed, cancelled}.
pub struct AppointmentLifecycleService {
    appointments: AppointmentStore,
}

impl AppointmentLifecycleService {
    pub fn new(appointments: AppointmentStore) -> Self {
        Self { appointments }
    }

    pub async fn get(&self, appointment_id: i64) -> Result<Appointment, AppError> {
        self.appointments
            .get(appointment_id)
            .await
            .ok_or_else(|| AppError::not_found("Appointment", appointment_id))
    }

    pub async fn confirm(&self, appointment_id: i64) -> Result<Appointment, AppError> {
        let mut appointment = self.get(appointment_id).await?;

        if appointment.status != AppointmentStatus::Scheduled {
            return Err(AppError::BusinessRule(format!(
                "Appointment with status '{}' cannot be confirmed",
                appointment.status
            )));
        }

        appointment.status = AppointmentStatus::Confirmed;
        self.appointments.update(appointment).await
    }

    pub async fn cancel(
        &self,
        appointment_id: i64,
        reason: Option<String>,
    ) -> Result<Appointment, AppError> {
        let mut appointment = self.get(appointment_id).await?;

        if appointment.status.is_terminal() {
            return Err(AppError::BusinessRule(format!(
                "Appointment with status '{}' cannot be cancelled",
                appointment.status
            )));
        }

        debug!("Cancelling appointment {}", appointment_id);

        appointment.status = AppointmentStatus::Cancelled;
        appointment.cancellation_reason = reason;
        self.appointments.update(appointment).await
    }

    pub async fn complete(&self, appointment_id: i64) -> Result<Appointment, AppError> {
        let mut appointment = self.get(appointment_id).await?;

        if !matches!(
            appointment.status,
            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
        ) {
            return Err(AppError::BusinessRule(format!(
                "Appointment with status '{}' cannot be completed",
                appointment.status
            )));
        }

        appointment.status = AppointmentStatus::Completed;
        self.appointments.update(appointment).await
    }

    /// Administrative removal; bypasses the status machine.
    pub async fn delete(&self, appointment_id: i64) -> Result<(), AppError> {
        self.get(appointment_id).await?;
        self.appointments.delete(appointment_id).await
    }
}
