use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ComposerResult;
use crate::models::{Composer, ComposerInput};

/// Repository trait for Composer persistence
///
/// Mutations on an unknown id return `Ok(None)` rather than an error, so the
/// caller decides how absence is reported.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComposerRepository: Send + Sync {
    async fn list(&self) -> ComposerResult<Vec<Composer>>;

    async fn get_by_id(&self, id: Uuid) -> ComposerResult<Option<Composer>>;

    async fn create(&self, input: ComposerInput) -> ComposerResult<Composer>;

    /// Replace all fields and return the new document
    async fn update(&self, id: Uuid, input: ComposerInput) -> ComposerResult<Option<Composer>>;

    /// Remove and return the deleted document
    async fn delete(&self, id: Uuid) -> ComposerResult<Option<Composer>>;
}
