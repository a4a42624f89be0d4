use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned when a signup reuses an existing `userName`
pub const USERNAME_TAKEN_MESSAGE: &str = "Username is already in use.";
/// Message returned for any failed login, whichever half was wrong
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username and/or password.";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username '{0}' is already in use")]
    UsernameTaken(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameTaken(_) => AppError::Conflict(USERNAME_TAKEN_MESSAGE.to_string()),
            UserError::InvalidCredentials => {
                AppError::InvalidCredentials(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            UserError::Store(msg) => AppError::Store(msg),
            UserError::PasswordHash(msg) | UserError::Internal(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Store(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for UserError {
    fn from(err: argon2::password_hash::Error) -> Self {
        UserError::PasswordHash(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_domain_rejections_map_to_401() {
        let taken: AppError = UserError::UsernameTaken("carl".to_string()).into();
        assert_eq!(taken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(taken.to_error_response(false).message, USERNAME_TAKEN_MESSAGE);

        let invalid: AppError = UserError::InvalidCredentials.into();
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            invalid.to_error_response(false).message,
            INVALID_CREDENTIALS_MESSAGE
        );
    }

    #[test]
    fn test_store_fault_maps_to_501() {
        let err: AppError = UserError::Store("connection refused".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            err.to_error_response(true).message,
            "MongoDB Exception: connection refused"
        );
    }

    #[test]
    fn test_hash_fault_maps_to_500() {
        let err: AppError = UserError::PasswordHash("invalid format".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
