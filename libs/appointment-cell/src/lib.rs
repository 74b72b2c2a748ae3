pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use services::*;

use patient_cell::models::PatientStore;
use psychologist_cell::models::{AvailabilityStore, PsychologistStore};
use shared_utils::session::SessionStore;

/// Store handles this cell needs at request time. Scheduling validates
/// against patients, psychologists and their availability windows, so it
/// borrows those cells' stores as well.
#[derive(Clone)]
pub struct AppointmentState {
    pub appointments: models::AppointmentStore,
    pub patients: PatientStore,
    pub psychologists: PsychologistStore,
    pub availabilities: AvailabilityStore,
    pub sessions: SessionStore,
}
