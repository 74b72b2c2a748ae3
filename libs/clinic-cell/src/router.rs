use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::ClinicState;

pub fn clinic_routes(state: ClinicState) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::list_clinics))
        .route("/{id}", get(handlers::get_clinic));

    let protected_routes = Router::new()
        .route("/", post(handlers::create_clinic))
        .route("/{id}", put(handlers::update_clinic))
        .route("/{id}", delete(handlers::delete_clinic))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
