//! Error codes carried in every error body.
//!
//! Each code has a string form for clients (`"NOT_FOUND"`), an integer for
//! logs and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::StoreError;
//! assert_eq!(code.as_str(), "STORE_ERROR");
//! assert_eq!(code.code(), 2001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Malformed input (1000s), answered with 400
    /// Request body failed field validation
    ValidationError,
    /// Path id is not a UUID
    InvalidUuid,
    /// Body is not JSON or does not match the expected shape
    InvalidJson,

    // Domain rejections (1100s), answered with 401
    /// No record with the given id
    NotFound,
    /// Record conflicts with an existing one
    Conflict,
    /// Unknown user or wrong password
    InvalidCredentials,

    /// No route matches the request path
    RouteNotFound,

    // Store faults (2000s), answered with 501
    StoreError,

    // Unexpected faults (5000s), answered with 500
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::StoreError => "STORE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1101,
            Self::Conflict => 1102,
            Self::InvalidCredentials => 1103,
            Self::RouteNotFound => 1201,
            Self::StoreError => 2001,
            Self::InternalError => 5001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::InvalidJson => "Invalid JSON body",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::InvalidCredentials => "Invalid username and/or password.",
            Self::RouteNotFound => "The requested resource was not found",
            Self::StoreError => "A database error occurred",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_matches_serde() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::InvalidCredentials,
            ErrorCode::StoreError,
            ErrorCode::InternalError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_error_code_integer_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::Conflict.code(), 1102);
        assert_eq!(ErrorCode::StoreError.code(), 2001);
        assert_eq!(ErrorCode::InternalError.code(), 5001);
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"INVALID_CREDENTIALS\"").unwrap();
        assert_eq!(code, ErrorCode::InvalidCredentials);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }
}
