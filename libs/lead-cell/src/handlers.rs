use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use shared_models::error::AppError;
use shared_models::response::ApiResponse;

use crate::models::{
    CreateLeadRequest, LeadContactedRequest, LeadConvertRequest, LeadLostRequest,
    UpdateLeadRequest,
};
use crate::services::LeadService;
use crate::LeadState;

#[axum::debug_handler]
pub async fn list_leads(State(state): State<LeadState>) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let leads = service.list().await;

    Ok(ApiResponse::list(&leads))
}

#[axum::debug_handler]
pub async fn get_lead(
    State(state): State<LeadState>,
    Path(lead_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let lead = service.get(lead_id).await?;

    Ok(ApiResponse::success(lead))
}

#[axum::debug_handler]
pub async fn create_lead(
    State(state): State<LeadState>,
    Json(request): Json<CreateLeadRequest>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let lead = service.create(request).await?;

    Ok(ApiResponse::created(lead))
}

#[axum::debug_handler]
pub async fn update_lead(
    State(state): State<LeadState>,
    Path(lead_id): Path<i64>,
    Json(request): Json<UpdateLeadRequest>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let lead = service.update(lead_id, request).await?;

    Ok(ApiResponse::success(lead))
}

#[axum::debug_handler]
pub async fn delete_lead(
    State(state): State<LeadState>,
    Path(lead_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    service.delete(lead_id).await?;

    Ok(ApiResponse::no_content())
}

#[axum::debug_handler]
pub async fn mark_lead_contacted(
    State(state): State<LeadState>,
    Path(lead_id): Path<i64>,
    Json(request): Json<LeadContactedRequest>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let lead = service.mark_contacted(lead_id, request.notes).await?;

    Ok(ApiResponse::success(lead))
}

#[axum::debug_handler]
pub async fn mark_lead_lost(
    State(state): State<LeadState>,
    Path(lead_id): Path<i64>,
    Json(request): Json<LeadLostRequest>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let lead = service.mark_lost(lead_id, request.reason).await?;

    Ok(ApiResponse::success(lead))
}

#[axum::debug_handler]
pub async fn convert_lead(
    State(state): State<LeadState>,
    Path(lead_id): Path<i64>,
    Json(request): Json<LeadConvertRequest>,
) -> Result<Response, AppError> {
    let service = LeadService::new(state.leads.clone());

    let lead = service.convert(lead_id, request.patient_id).await?;

    Ok(ApiResponse::success(lead))
}
