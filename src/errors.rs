use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug, Clone)]
pub enum WorkbenchError {
    ValidationError(String),
    NotFound(String),
    UpstreamStatus { status: u16, body: String },
    NetworkError(String),
    ParseError(String),
    StorageError(String),
    ConfigError(String),
}

impl fmt::Display for WorkbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkbenchError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            WorkbenchError::NotFound(msg) => write!(f, "Not found: {}", msg),
            WorkbenchError::UpstreamStatus { status, body } => {
                write!(f, "Upstream error: status {}, body {}", status, body)
            }
            WorkbenchError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            WorkbenchError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            WorkbenchError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            WorkbenchError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for WorkbenchError {}

impl WorkbenchError {
    /// Message shown to the caller in the `detail` field.
    fn detail(&self) -> String {
        match self {
            WorkbenchError::ValidationError(msg) | WorkbenchError::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for WorkbenchError {
    fn status_code(&self) -> StatusCode {
        match self {
            WorkbenchError::ValidationError(_) => StatusCode::BAD_REQUEST,
            WorkbenchError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkbenchError::UpstreamStatus { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            WorkbenchError::NetworkError(_) => StatusCode::BAD_GATEWAY,
            WorkbenchError::ParseError(_) => StatusCode::BAD_GATEWAY,
            WorkbenchError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WorkbenchError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.detail() }))
    }
}

impl From<reqwest::Error> for WorkbenchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WorkbenchError::ParseError(err.to_string())
        } else if let Some(status) = err.status() {
            WorkbenchError::UpstreamStatus {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            WorkbenchError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WorkbenchError {
    fn from(err: serde_json::Error) -> Self {
        WorkbenchError::ParseError(err.to_string())
    }
}

/// Body extraction failures are the caller's fault and get a `detail` like any other.
impl From<JsonPayloadError> for WorkbenchError {
    fn from(err: JsonPayloadError) -> Self {
        WorkbenchError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for WorkbenchError {
    fn from(err: std::io::Error) -> Self {
        WorkbenchError::StorageError(err.to_string())
    }
}
