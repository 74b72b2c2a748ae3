use sha2::{Digest, Sha256};
use tracing::debug;

use shared_models::auth::{AuthUser, TokenResponse};
use shared_models::error::AppError;
use shared_utils::session::SessionStore;

use crate::models::UserStore;

/// Hex-encoded SHA-256 digest of a plaintext password.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

pub struct SessionService {
    users: UserStore,
    sessions: SessionStore,
}

impl SessionService {
    pub fn new(users: UserStore, sessions: SessionStore) -> Self {
        Self { users, sessions }
    }

    /// Verifies credentials and issues a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        debug!("Login attempt for {}", email);

        let user = self
            .users
            .filter(|user| user.email == email)
            .await
            .into_iter()
            .next()
            .filter(|user| user.password_digest == password_digest(password))
            .ok_or_else(|| AppError::Auth("Invalid email or password".to_string()))?;

        let identity = AuthUser {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.user_type,
        };
        let token = self.sessions.issue(identity).await;

        debug!("Session issued for user {}", user.id);

        Ok(TokenResponse {
            token,
            user_id: user.id,
            name: user.name,
            user_type: user.user_type,
        })
    }

    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        if self.sessions.revoke(token).await {
            Ok(())
        } else {
            Err(AppError::Auth("Invalid or expired session token".to_string()))
        }
    }
}
