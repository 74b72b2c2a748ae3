use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use shared_models::error::AppError;
use shared_models::response::ApiResponse;

use crate::models::{CreateClinicRequest, UpdateClinicRequest};
use crate::services::ClinicService;
use crate::ClinicState;

#[axum::debug_handler]
pub async fn list_clinics(State(state): State<ClinicState>) -> Result<Response, AppError> {
    let service = ClinicService::new(state.clinics.clone());

    let clinics = service.list().await;

    Ok(ApiResponse::list(&clinics))
}

#[axum::debug_handler]
pub async fn get_clinic(
    State(state): State<ClinicState>,
    Path(clinic_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = ClinicService::new(state.clinics.clone());

    let clinic = service.get(clinic_id).await?;

    Ok(ApiResponse::success(clinic))
}

#[axum::debug_handler]
pub async fn create_clinic(
    State(state): State<ClinicState>,
    Json(request): Json<CreateClinicRequest>,
) -> Result<Response, AppError> {
    let service = ClinicService::new(state.clinics.clone());

    let clinic = service.create(request).await?;

    Ok(ApiResponse::created(clinic))
}

#[axum::debug_handler]
pub async fn update_clinic(
    State(state): State<ClinicState>,
    Path(clinic_id): Path<i64>,
    Json(request): Json<UpdateClinicRequest>,
) -> Result<Response, AppError> {
    let service = ClinicService::new(state.clinics.clone());

    let clinic = service.update(clinic_id, request).await?;

    Ok(ApiResponse::success(clinic))
}

#[axum::debug_handler]
pub async fn delete_clinic(
    State(state): State<ClinicState>,
    Path(clinic_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = ClinicService::new(state.clinics.clone());

    service.delete(clinic_id).await?;

    Ok(ApiResponse::no_content())
}
