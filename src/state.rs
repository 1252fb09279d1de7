use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::Config;
use crate::cors::CorsPolicy;

/// Shared application state, immutable after startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokens: Arc<TokenIssuer>,
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(config: Config, tokens: TokenIssuer, cors: CorsPolicy) -> Self {
        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            cors: Arc::new(cors),
        }
    }
}
