use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use shared_models::error::AppError;
use shared_models::response::ApiResponse;

use crate::models::{CreatePatientRequest, UpdatePatientRequest};
use crate::services::PatientService;
use crate::PatientState;

#[axum::debug_handler]
pub async fn list_patients(State(state): State<PatientState>) -> Result<Response, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patients = service.list().await;

    Ok(ApiResponse::list(&patients))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<PatientState>,
    Path(patient_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patient = service.get(patient_id).await?;

    Ok(ApiResponse::success(patient))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<PatientState>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<Response, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patient = service.create(request).await?;

    Ok(ApiResponse::created(patient))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<PatientState>,
    Path(patient_id): Path<i64>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Response, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patient = service.update(patient_id, request).await?;

    Ok(ApiResponse::success(patient))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<PatientState>,
    Path(patient_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = PatientService::new(state.patients.clone());

    service.delete(patient_id).await?;

    Ok(ApiResponse::no_content())
}
