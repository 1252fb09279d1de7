use std::time::Duration;

use livekit_api::access_token::{AccessToken, VideoGrants};

use crate::config::Config;
use crate::error::Result;

/// Issued tokens are valid for 24 hours from signing.
const TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Mints signed room-join access tokens
#[derive(Clone)]
pub struct TokenIssuer {
    api_key: String,
    api_secret: String,
}

impl TokenIssuer {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        }
    }

    /// Sign a token granting `identity` the right to join `room_name`.
    ///
    /// The grant carries no record on our side; the token is the whole
    /// credential.
    pub fn mint(&self, room_name: &str, identity: &str) -> Result<String> {
        let grants = VideoGrants {
            room_join: true,
            room: room_name.to_string(),
            ..Default::default()
        };

        let token = AccessToken::with_api_key(&self.api_key, &self.api_secret)
            .with_identity(identity)
            .with_grants(grants)
            .with_ttl(TOKEN_TTL)
            .to_jwt()?;

        Ok(token)
    }
}
