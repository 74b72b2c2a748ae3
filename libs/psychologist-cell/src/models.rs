use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::serde_hhmm;
use shared_store::{Entity, InMemoryStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Psychologist {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub crp: String,
    pub specialty: String,
    pub themes: Vec<String>,
    pub bio: String,
    pub hourly_rate: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for Psychologist {
    const RESOURCE: &'static str = "Psychologist";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

pub type PsychologistStore = InMemoryStore<Psychologist>;

/// A recurring weekly window during which a psychologist accepts bookings.
/// Deactivated windows are kept but excluded from scheduling and overlap
/// checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub id: i64,
    pub psychologist_id: i64,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u8,
    #[serde(with = "serde_hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub end_time: NaiveTime,
    pub is_active: bool,
}

impl Entity for Availability {
    const RESOURCE: &'static str = "Availability";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

pub type AvailabilityStore = InMemoryStore<Availability>;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePsychologistRequest {
    pub user_id: i64,
    pub name: String,
    pub crp: String,
    pub specialty: String,
    pub hourly_rate: f64,
    pub themes: Option<Vec<String>>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePsychologistRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub themes: Option<Vec<String>>,
    pub bio: Option<String>,
    pub hourly_rate: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PsychologistListQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// Times come in as raw "HH:MM" strings so the service can reject malformed
/// input with the field-level validation error the API promises.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub psychologist_id: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_active: Option<bool>,
}
