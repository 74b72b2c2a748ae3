use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};

use shared_models::error::AppError;
use shared_models::response::ApiResponse;

use crate::models::{
    AppointmentListQuery, AvailableSlotsRequest, BookAppointmentRequest,
    CancelAppointmentRequest,
};
use crate::services::{AppointmentLifecycleService, SchedulingService};
use crate::AppointmentState;

fn scheduling_service(state: &AppointmentState) -> SchedulingService {
    SchedulingService::new(
        state.appointments.clone(),
        state.patients.clone(),
        state.psychologists.clone(),
        state.availabilities.clone(),
    )
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Response, AppError> {
    let service = scheduling_service(&state);

    let appointments = service.list(query.patient_id, query.psychologist_id).await;

    Ok(ApiResponse::list(&appointments))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = scheduling_service(&state);

    let appointment = service.get(appointment_id).await?;

    Ok(ApiResponse::success(appointment))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Response, AppError> {
    let service = scheduling_service(&state);

    let appointment = service.schedule(request).await?;

    Ok(ApiResponse::created(appointment))
}

#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<AppointmentState>,
    Json(request): Json<AvailableSlotsRequest>,
) -> Result<Response, AppError> {
    let service = scheduling_service(&state);

    let slots = service
        .available_slots(request.psychologist_id, &request.date, request.duration)
        .await;

    Ok(ApiResponse::list(&slots))
}

#[axum::debug_handler]
pub async fn confirm_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AppointmentLifecycleService::new(state.appointments.clone());

    let appointment = service.confirm(appointment_id).await?;

    Ok(ApiResponse::success(appointment))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<CancelAppointmentRequest>,
) -> Result<Response, AppError> {
    let service = AppointmentLifecycleService::new(state.appointments.clone());

    let appointment = service
        .cancel(appointment_id, request.cancellation_reason)
        .await?;

    Ok(ApiResponse::success(appointment))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AppointmentLifecycleService::new(state.appointments.clone());

    let appointment = service.complete(appointment_id).await?;

    Ok(ApiResponse::success(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = AppointmentLifecycleService::new(state.appointments.clone());

    service.delete(appointment_id).await?;

    Ok(ApiResponse::no_content())
}
