pub mod health;
pub mod token;

use axum::{middleware, Router};

use crate::cors;
use crate::state::AppState;

/// Create the API router with all routes
///
/// The CORS middleware wraps the whole router so it also answers
/// preflights for unmatched paths.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(health::health_routes())
        .layer(middleware::from_fn_with_state(state.clone(), cors::apply))
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new().merge(token::token_routes())
}
