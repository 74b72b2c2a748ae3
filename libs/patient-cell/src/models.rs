use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_store::{Entity, InMemoryStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Patient {
    const RESOURCE: &'static str = "Patient";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

pub type PatientStore = InMemoryStore<Patient>;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cpf: Option<String>,
}
