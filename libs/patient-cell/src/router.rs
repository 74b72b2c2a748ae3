use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::PatientState;

pub fn patient_routes(state: PatientState) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(handlers::list_patients))
        .route("/{id}", get(handlers::get_patient));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/", post(handlers::create_patient))
        .route("/{id}", put(handlers::update_patient))
        .route("/{id}", delete(handlers::delete_patient))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
