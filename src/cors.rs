//! Per-request CORS policy.
//!
//! Known front-end origins get their origin echoed back with credentials
//! allowed; everything else falls back to a plain wildcard. The wildcard
//! and the credentials flag are never combined (browsers reject that).

use std::collections::HashSet;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
/// Preflight cache lifetime, seconds.
const MAX_AGE: &str = "3600";

/// Exact-match allow-list of origins trusted with credentialed responses.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: HashSet<String>,
}

impl CorsPolicy {
    pub fn new(origins: &[String]) -> Self {
        Self {
            allowed_origins: origins.iter().cloned().collect(),
        }
    }

    /// Whether `origin` may receive a credentialed response.
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.contains(origin)
    }
}

/// Middleware applying access-control headers to every response.
///
/// Preflight `OPTIONS` requests are answered here and never reach a route
/// handler.
pub async fn apply(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();
    let credentialed = origin
        .as_ref()
        .and_then(|value| value.to_str().ok())
        .is_some_and(|origin| state.cors.is_allowed(origin));

    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    match origin {
        Some(origin) if credentialed => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
        _ => {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE));
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let policy = CorsPolicy::new(&[
            "https://zoom.example.com".to_string(),
            "http://localhost:3000".to_string(),
        ]);

        assert!(policy.is_allowed("https://zoom.example.com"));
        assert!(policy.is_allowed("http://localhost:3000"));
        assert!(!policy.is_allowed("https://evil.example.com"));
        assert!(!policy.is_allowed("https://zoom.example.com/"));
        assert!(!policy.is_allowed("zoom.example.com"));
    }

    #[test]
    fn test_empty_allow_list() {
        let policy = CorsPolicy::new(&[]);
        assert!(!policy.is_allowed("https://zoom.example.com"));
    }
}
