use std::env;

const DEFAULT_MEDIA_SERVER_URL: &str = "wss://zoom.zacloth.com";
const DEFAULT_API_KEY: &str = "devkey";
const DEFAULT_API_SECRET: &str = "6RfzN3B2Lqj8vzdP9XC4tFkp57YhUBsM";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://zoom.zacloth.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub media_server_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            media_server_url: env::var("MEDIA_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_MEDIA_SERVER_URL.to_string()),
            api_key: env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            api_secret: env::var("API_SECRET").unwrap_or_else(|_| DEFAULT_API_SECRET.to_string()),
            allowed_origins: parse_allowed_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// True while the built-in development key/secret pair is still in effect.
    pub fn uses_default_credentials(&self) -> bool {
        self.api_key == DEFAULT_API_KEY || self.api_secret == DEFAULT_API_SECRET
    }
}

/// Comma-separated origin list, blanks dropped.
fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
}
