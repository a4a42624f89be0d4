use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TeamError {
    #[error("Team not found: {0}")]
    NotFound(Uuid),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type TeamResult<T> = Result<T, TeamError>;

impl From<TeamError> for AppError {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::NotFound(_) => AppError::NotFound("Invalid teamId".to_string()),
            TeamError::Store(msg) => AppError::Store(msg),
            TeamError::Serialization(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for TeamError {
    fn from(err: mongodb::error::Error) -> Self {
        TeamError::Store(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for TeamError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        TeamError::Serialization(err.to_string())
    }
}
