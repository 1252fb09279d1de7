use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::models::{JoinRequest, TokenResponse};
use crate::state::AppState;

/// Token routes
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}

/// POST /api/token - Mint a room-join token for a user
async fn issue_token(
    State(state): State<AppState>,
    payload: std::result::Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected malformed token request");
        AppError::BadRequest("Invalid request".to_string())
    })?;

    if request.room_name.is_empty() || request.username.is_empty() {
        return Err(AppError::BadRequest(
            "Room name and username required".to_string(),
        ));
    }

    let token = state.tokens.mint(&request.room_name, &request.username)?;

    tracing::info!(
        room = %request.room_name,
        identity = %request.username,
        "Issued room join token"
    );

    Ok(Json(TokenResponse {
        token,
        url: state.config.media_server_url.clone(),
    }))
}
