use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::LeadState;

pub fn lead_routes(state: LeadState) -> Router {
    // Lead capture stays public; pipeline management requires a session.
    let public_routes = Router::new().route("/", post(handlers::create_lead));

    let protected_routes = Router::new()
        .route("/", get(handlers::list_leads))
        .route("/{id}", get(handlers::get_lead))
        .route("/{id}", put(handlers::update_lead))
        .route("/{id}", delete(handlers::delete_lead))
        .route("/{id}/contacted", patch(handlers::mark_lead_contacted))
        .route("/{id}/lost", patch(handlers::mark_lead_lost))
        .route("/{id}/convert", patch(handlers::convert_lead))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
