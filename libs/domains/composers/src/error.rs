use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ComposerError {
    #[error("Composer not found: {0}")]
    NotFound(Uuid),

    #[error("Store error: {0}")]
    Store(String),
}

pub type ComposerResult<T> = Result<T, ComposerError>;

/// Unknown ids are a domain rejection (401), not a 404.
impl From<ComposerError> for AppError {
    fn from(err: ComposerError) -> Self {
        match err {
            ComposerError::NotFound(_) => AppError::NotFound("Invalid composerId".to_string()),
            ComposerError::Store(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for ComposerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ComposerError {
    fn from(err: mongodb::error::Error) -> Self {
        ComposerError::Store(err.to_string())
    }
}
