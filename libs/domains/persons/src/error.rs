use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PersonError {
    #[error("Person not found: {0}")]
    NotFound(Uuid),

    #[error("Store error: {0}")]
    Store(String),
}

pub type PersonResult<T> = Result<T, PersonError>;

impl From<PersonError> for AppError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::NotFound(_) => AppError::NotFound("Invalid personId".to_string()),
            PersonError::Store(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for PersonError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PersonError {
    fn from(err: mongodb::error::Error) -> Self {
        PersonError::Store(err.to_string())
    }
}
