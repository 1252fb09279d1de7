use axum::{routing::get, Router};

use crate::state::AppState;

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Liveness probe
async fn health_check() -> &'static str {
    "OK"
}
