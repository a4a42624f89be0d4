pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;
use validator::ValidationErrors;

/// Prefix for store-layer faults (HTTP 501)
pub const STORE_EXCEPTION_PREFIX: &str = "MongoDB Exception";
/// Prefix for unexpected in-process faults (HTTP 500)
pub const SERVER_EXCEPTION_PREFIX: &str = "Server Exception";

static EXPOSE_ERROR_DETAILS: AtomicBool = AtomicBool::new(false);

/// Include fault details in 500/501 messages. Off unless enabled at startup.
pub fn set_expose_error_details(expose: bool) {
    EXPOSE_ERROR_DETAILS.store(expose, Ordering::Relaxed);
}

pub fn expose_error_details() -> bool {
    EXPOSE_ERROR_DETAILS.load(Ordering::Relaxed)
}

fn fault_message(prefix: &str, detail: &str, fallback: ErrorCode, expose: bool) -> String {
    if expose {
        format!("{}: {}", prefix, detail)
    } else {
        format!("{}: {}", prefix, fallback.default_message())
    }
}

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1102,
///   "error": "CONFLICT",
///   "message": "Username is already in use."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured details, e.g. per-field validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error converted into the HTTP status convention:
///
/// | Class            | Status | Variants |
/// |------------------|--------|----------|
/// | malformed input  | 400    | `JsonExtractorRejection`, `ValidationError`, `UuidError`, `PathRejection` |
/// | domain rejection | 401    | `NotFound`, `Conflict`, `InvalidCredentials` |
/// | unexpected fault | 500    | `InternalServerError` |
/// | store fault      | 501    | `Store` |
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Path error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::UuidError(_)
            | AppError::PathRejection(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Conflict(_) | AppError::InvalidCredentials(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Store(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::UuidError(_) | AppError::PathRejection(_) => ErrorCode::InvalidUuid,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            AppError::Store(_) => ErrorCode::StoreError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    /// Render the response body, honoring the error-detail setting.
    pub fn to_error_response(&self, expose_details: bool) -> ErrorResponse {
        let code = self.error_code();
        let (message, details) = match self {
            AppError::JsonExtractorRejection(e) => (e.body_text(), None),
            AppError::ValidationError(e) => (
                code.default_message().to_string(),
                Some(validation_details(e)),
            ),
            AppError::UuidError(_) | AppError::PathRejection(_) => {
                (code.default_message().to_string(), None)
            }
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InvalidCredentials(msg) => (msg.clone(), None),
            AppError::Store(detail) => (
                fault_message(STORE_EXCEPTION_PREFIX, detail, code, expose_details),
                None,
            ),
            AppError::InternalServerError(detail) => (
                fault_message(SERVER_EXCEPTION_PREFIX, detail, code, expose_details),
                None,
            ),
        };

        ErrorResponse {
            details,
            ..ErrorResponse::new(code, message)
        }
    }
}

fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(fields)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(
                error_code = code.code(),
                status = status.as_u16(),
                error = %self,
                "Request failed"
            );
        } else {
            tracing::info!(
                error_code = code.code(),
                status = status.as_u16(),
                error = %self,
                "Request rejected"
            );
        }

        let body = self.to_error_response(expose_error_details());
        (status, Json(body)).into_response()
    }
}
