use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};

use shared_models::error::AppError;
use shared_models::response::ApiResponse;

use crate::models::{
    CreateAvailabilityRequest, CreatePsychologistRequest, PsychologistListQuery,
    UpdateAvailabilityRequest, UpdatePsychologistRequest,
};
use crate::services::{AvailabilityService, PsychologistService};
use crate::PsychologistState;

#[axum::debug_handler]
pub async fn list_psychologists(
    State(state): State<PsychologistState>,
    Query(query): Query<PsychologistListQuery>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    let psychologists = service.list(query.active_only).await;

    Ok(ApiResponse::list(&psychologists))
}

#[axum::debug_handler]
pub async fn get_psychologist(
    State(state): State<PsychologistState>,
    Path(psychologist_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    let psychologist = service.get(psychologist_id).await?;

    Ok(ApiResponse::success(psychologist))
}

#[axum::debug_handler]
pub async fn create_psychologist(
    State(state): State<PsychologistState>,
    Json(request): Json<CreatePsychologistRequest>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    let psychologist = service.create(request).await?;

    Ok(ApiResponse::created(psychologist))
}

#[axum::debug_handler]
pub async fn update_psychologist(
    State(state): State<PsychologistState>,
    Path(psychologist_id): Path<i64>,
    Json(request): Json<UpdatePsychologistRequest>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    let psychologist = service.update(psychologist_id, request).await?;

    Ok(ApiResponse::success(psychologist))
}

#[axum::debug_handler]
pub async fn delete_psychologist(
    State(state): State<PsychologistState>,
    Path(psychologist_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    service.delete(psychologist_id).await?;

    Ok(ApiResponse::no_content())
}

#[axum::debug_handler]
pub async fn activate_psychologist(
    State(state): State<PsychologistState>,
    Path(psychologist_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    let psychologist = service.activate(psychologist_id).await?;

    Ok(ApiResponse::success(psychologist))
}

#[axum::debug_handler]
pub async fn deactivate_psychologist(
    State(state): State<PsychologistState>,
    Path(psychologist_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = PsychologistService::new(state.psychologists.clone());

    let psychologist = service.deactivate(psychologist_id).await?;

    Ok(ApiResponse::success(psychologist))
}

#[axum::debug_handler]
pub async fn list_availabilities(
    State(state): State<PsychologistState>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availabilities = service.list_all().await;

    Ok(ApiResponse::list(&availabilities))
}

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<PsychologistState>,
    Path(availability_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availability = service.get(availability_id).await?;

    Ok(ApiResponse::success(availability))
}

#[axum::debug_handler]
pub async fn get_psychologist_availabilities(
    State(state): State<PsychologistState>,
    Path(psychologist_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availabilities = service.by_psychologist(psychologist_id).await;

    Ok(ApiResponse::list(&availabilities))
}

#[axum::debug_handler]
pub async fn create_availability(
    State(state): State<PsychologistState>,
    Json(request): Json<CreateAvailabilityRequest>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availability = service.create(request).await?;

    Ok(ApiResponse::created(availability))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<PsychologistState>,
    Path(availability_id): Path<i64>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availability = service.update(availability_id, request).await?;

    Ok(ApiResponse::success(availability))
}

#[axum::debug_handler]
pub async fn delete_availability(
    State(state): State<PsychologistState>,
    Path(availability_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    service.delete(availability_id).await?;

    Ok(ApiResponse::no_content())
}

#[axum::debug_handler]
pub async fn activate_availability(
    State(state): State<PsychologistState>,
    Path(availability_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availability = service.activate(availability_id).await?;

    Ok(ApiResponse::success(availability))
}

#[axum::debug_handler]
pub async fn deactivate_availability(
    State(state): State<PsychologistState>,
    Path(availability_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AvailabilityService::new(state.availabilities.clone(), state.psychologists.clone());

    let availability = service.deactivate(availability_id).await?;

    Ok(ApiResponse::success(availability))
}
