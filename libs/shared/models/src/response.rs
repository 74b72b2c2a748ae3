use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Helpers for the standard response envelope:
/// `{"success": true, "data": ...}` on success, with lists wrapped as
/// `{"items": [...], "count": n}`.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Response {
        (
            StatusCode::OK,
            Json(json!({ "success": true, "data": data })),
        )
            .into_response()
    }

    pub fn created<T: Serialize>(data: T) -> Response {
        (
            StatusCode::CREATED,
            Json(json!({ "success": true, "data": data })),
        )
            .into_response()
    }

    pub fn no_content() -> Response {
        StatusCode::NO_CONTENT.into_response()
    }

    pub fn list<T: Serialize>(items: &[T]) -> Response {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "items": items, "count": items.len() },
            })),
        )
            .into_response()
    }
}
