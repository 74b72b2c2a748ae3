use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::AppointmentState;

pub fn appointment_routes(state: AppointmentState) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/{id}", get(handlers::get_appointment))
        .route("/available-slots", post(handlers::available_slots));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/{id}", delete(handlers::delete_appointment))
        .route("/{id}/confirm", patch(handlers::confirm_appointment))
        .route("/{id}/cancel", patch(handlers::cancel_appointment))
        .route("/{id}/complete", patch(handlers::complete_appointment))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
