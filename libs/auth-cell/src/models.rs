use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::auth::UserType;
use shared_store::{Entity, InMemoryStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_digest: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    const RESOURCE: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

pub type UserStore = InMemoryStore<User>;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
