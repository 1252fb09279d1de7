use serde::{Deserialize, Serialize};

/// Body of `POST /api/token`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub room_name: String,
    pub username: String,
}

/// Successful token issuance reply.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed room-join credential, opaque to this service.
    pub token: String,
    /// Media server endpoint the client should connect to.
    pub url: String,
}
