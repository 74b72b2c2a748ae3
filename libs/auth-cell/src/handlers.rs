use axum::{extract::State, response::Response, Extension, Json};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};

use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_models::response::ApiResponse;

use crate::models::LoginRequest;
use crate::services::SessionService;
use crate::AuthState;

#[axum::debug_handler]
pub async fn login(
    State(state): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let service = SessionService::new(state.users.clone(), state.sessions.clone());

    let token = service.login(&request.email, &request.password).await?;

    Ok(ApiResponse::success(token))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<AuthState>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Response, AppError> {
    let service = SessionService::new(state.users.clone(), state.sessions.clone());

    service.logout(auth.token()).await?;

    Ok(ApiResponse::no_content())
}

#[axum::debug_handler]
pub async fn me(Extension(user): Extension<AuthUser>) -> Result<Response, AppError> {
    Ok(ApiResponse::success(user))
}
