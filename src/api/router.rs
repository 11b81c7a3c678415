use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::lists;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/auth", auth::create_auth_router())
        .nest("/lists", lists::create_lists_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
