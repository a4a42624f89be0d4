//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Single `{id}` path segment parsed as a UUID.
///
/// Rejects with `400 INVALID_UUID` instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn get_composer(UuidPath(id): UuidPath) -> String {
///     format!("Composer ID: {}", id)
/// }
///
/// let app = Router::new().route("/composers/{id}", get(get_composer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        let id = Uuid::parse_str(&raw)?;
        Ok(UuidPath(id))
    }
}
