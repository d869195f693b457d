//! API route definitions

use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;

use super::auth::require_bearer;
use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    // Assistant endpoints require a bearer token
    let ai = Router::new()
        .route("/chat", post(handlers::chat))
        .route("/prompts", get(handlers::list_prompts))
        .route("/analyze-mood", post(handlers::analyze_mood))
        .route("/insights", get(handlers::journal_insights))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let entries = Router::new()
        .route(
            "/entries",
            post(handlers::create_entry).get(handlers::list_entries),
        )
        .route("/entries/deleted", get(handlers::list_deleted_entries))
        .route("/entries/:id", delete(handlers::delete_entry))
        .route("/restore/:id", patch(handlers::restore_entry))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/ai", ai)
        .merge(entries)
        .with_state(state)
}
