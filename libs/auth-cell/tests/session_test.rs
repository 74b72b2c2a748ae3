use assert_matches::assert_matches;
use chrono::Utc;

use auth_cell::models::{User, UserStore};
use auth_cell::services::{password_digest, SessionService};
use shared_models::auth::UserType;
use shared_models::error::AppError;
use shared_store::Repository;
use shared_utils::session::SessionStore;

async fn setup() -> (SessionService, SessionStore) {
    let users = UserStore::new();
    let sessions = SessionStore::new();

    users
        .add(User {
            id: 0,
            name: "Ana Souza".to_string(),
            email: "ana@synapse.dev".to_string(),
            password_digest: password_digest("secret"),
            user_type: UserType::Psychologist,
            created_at: Utc::now(),
        })
        .await;

    (SessionService::new(users, sessions.clone()), sessions)
}

#[tokio::test]
async fn login_issues_a_resolvable_token() {
    let (service, sessions) = setup().await;

    let response = service.login("ana@synapse.dev", "secret").await.unwrap();
    assert_eq!(response.user_id, 1);
    assert_eq!(response.name, "Ana Souza");
    assert_eq!(response.user_type, UserType::Psychologist);

    let identity = sessions.resolve(&response.token).await.unwrap();
    assert_eq!(identity.user_id, 1);
    assert_eq!(identity.email, "ana@synapse.dev");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (service, _) = setup().await;

    let err = service
        .login("ana@synapse.dev", "wrong")
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Auth(_));

    let err = service.login("nobody@synapse.dev", "secret").await.unwrap_err();
    assert_matches!(err, AppError::Auth(_));
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let (service, sessions) = setup().await;

    let response = service.login("ana@synapse.dev", "secret").await.unwrap();

    service.logout(&response.token).await.unwrap();
    assert!(sessions.resolve(&response.token).await.is_none());

    let err = service.logout(&response.token).await.unwrap_err();
    assert_matches!(err, AppError::Auth(_));
}
