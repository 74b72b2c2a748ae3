use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_store::{Entity, InMemoryStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Clinic {
    const RESOURCE: &'static str = "Clinic";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

pub type ClinicStore = InMemoryStore<Clinic>;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClinicRequest {
    pub user_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClinicRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
