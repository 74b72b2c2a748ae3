use axum::{response::Response, routing::get, Router};
use serde_json::json;

use appointment_cell::models::AppointmentStore;
use appointment_cell::AppointmentState;
use auth_cell::models::UserStore;
use auth_cell::AuthState;
use clinic_cell::models::ClinicStore;
use clinic_cell::ClinicState;
use lead_cell::models::LeadStore;
use lead_cell::LeadState;
use patient_cell::models::PatientStore;
use patient_cell::PatientState;
use psychologist_cell::models::{AvailabilityStore, PsychologistStore};
use psychologist_cell::PsychologistState;
use shared_models::response::ApiResponse;
use shared_utils::session::SessionStore;

/// Every in-memory store in the process. Cells borrow the handles they need;
/// the handles share storage, so all routers observe the same data.
#[derive(Clone, Default)]
pub struct Stores {
    pub users: UserStore,
    pub sessions: SessionStore,
    pub patients: PatientStore,
    pub psychologists: PsychologistStore,
    pub availabilities: AvailabilityStore,
    pub appointments: AppointmentStore,
    pub clinics: ClinicStore,
    pub leads: LeadStore,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn create_router(stores: Stores) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api/auth",
            auth_cell::router::auth_routes(AuthState {
                users: stores.users.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
        .nest(
            "/api/patients",
            patient_cell::router::patient_routes(PatientState {
                patients: stores.patients.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
        .nest(
            "/api/psychologists",
            psychologist_cell::router::psychologist_routes(PsychologistState {
                psychologists: stores.psychologists.clone(),
                availabilities: stores.availabilities.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
        .nest(
            "/api/availabilities",
            psychologist_cell::router::availability_routes(PsychologistState {
                psychologists: stores.psychologists.clone(),
                availabilities: stores.availabilities.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
        .nest(
            "/api/appointments",
            appointment_cell::router::appointment_routes(AppointmentState {
                appointments: stores.appointments.clone(),
                patients: stores.patients.clone(),
                psychologists: stores.psychologists.clone(),
                availabilities: stores.availabilities.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
        .nest(
            "/api/clinics",
            clinic_cell::router::clinic_routes(ClinicState {
                clinics: stores.clinics.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
        .nest(
            "/api/leads",
            lead_cell::router::lead_routes(LeadState {
                leads: stores.leads.clone(),
                sessions: stores.sessions.clone(),
            }),
        )
}

async fn health_check() -> Response {
    ApiResponse::success(json!({
        "status": "healthy",
        "service": "Synapse API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
