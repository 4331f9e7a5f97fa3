use std::any::Any;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::ModelGatewayError;
use crate::application::services::DetectionError;

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid Base64 string")]
    InvalidBase64,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Invalid API key or malformed request")]
    Unauthorized,
    #[error("{0}")]
    Upstream(String),
    #[error("Empty response from AI engine")]
    EmptyUpstreamResponse,
    #[error("Invalid JSON from Gemini API: {0}")]
    MalformedUpstreamJson(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBase64 | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::EmptyUpstreamResponse | ApiError::MalformedUpstreamJson(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}

impl From<DetectionError> for ApiError {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::Gateway(ModelGatewayError::EmptyResponse) => {
                ApiError::EmptyUpstreamResponse
            }
            DetectionError::Gateway(e @ ModelGatewayError::ApiRequestFailed(_)) => {
                ApiError::Upstream(e.to_string())
            }
            DetectionError::MalformedResponse(e) => ApiError::MalformedUpstreamJson(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::InvalidRequest(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Converts a handler panic into the generic 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };
    ApiError::Internal(message).into_response()
}
