pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use services::*;

use shared_utils::session::SessionStore;

/// Store handles this cell needs at request time.
#[derive(Clone)]
pub struct ClinicState {
    pub clinics: models::ClinicStore,
    pub sessions: SessionStore,
}
