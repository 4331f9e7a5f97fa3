use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// The single shared secret callers present in `x-api-key`.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, presented: Option<&str>) -> bool {
        presented == Some(&*self.0)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Rejects the request with 403 before its body is read unless the header
/// equals the configured key.
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !api_key.matches(presented) {
        tracing::warn!(header_present = presented.is_some(), "API key check failed");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
