use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::PsychologistState;

pub fn psychologist_routes(state: PsychologistState) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(handlers::list_psychologists))
        .route("/{id}", get(handlers::get_psychologist));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/", post(handlers::create_psychologist))
        .route("/{id}", put(handlers::update_psychologist))
        .route("/{id}", delete(handlers::delete_psychologist))
        .route("/{id}/activate", patch(handlers::activate_psychologist))
        .route("/{id}/deactivate", patch(handlers::deactivate_psychologist))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

pub fn availability_routes(state: PsychologistState) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::list_availabilities))
        .route("/{id}", get(handlers::get_availability))
        .route(
            "/psychologist/{id}",
            get(handlers::get_psychologist_availabilities),
        );

    let protected_routes = Router::new()
        .route("/", post(handlers::create_availability))
        .route("/{id}", put(handlers::update_availability))
        .route("/{id}", delete(handlers::delete_availability))
        .route("/{id}/activate", patch(handlers::activate_availability))
        .route("/{id}/deactivate", patch(handlers::deactivate_availability))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
