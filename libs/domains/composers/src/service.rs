//! Composer Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ComposerError, ComposerResult};
use crate::models::{Composer, ComposerInput};
use crate::repository::ComposerRepository;

pub struct ComposerService<R: ComposerRepository> {
    repository: Arc<R>,
}

impl<R: ComposerRepository> ComposerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_composers(&self) -> ComposerResult<Vec<Composer>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_composer(&self, id: Uuid) -> ComposerResult<Composer> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ComposerError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn create_composer(&self, input: ComposerInput) -> ComposerResult<Composer> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_composer(&self, id: Uuid, input: ComposerInput) -> ComposerResult<Composer> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(ComposerError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_composer(&self, id: Uuid) -> ComposerResult<Composer> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ComposerError::NotFound(id))
    }
}

impl<R: ComposerRepository> Clone for ComposerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockComposerRepository;

    fn input() -> ComposerInput {
        ComposerInput {
            first_name: "Ludwig".to_string(),
            last_name: "van Beethoven".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_unknown_composer_is_not_found() {
        let mut mock = MockComposerRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let service = ComposerService::new(mock);
        let id = Uuid::now_v7();

        assert!(matches!(
            service.get_composer(id).await,
            Err(ComposerError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_update_returns_replacement() {
        let id = Uuid::now_v7();
        let mut mock = MockComposerRepository::new();
        mock.expect_update()
            .withf(move |target, input| *target == id && input.first_name == "Ludwig")
            .times(1)
            .returning(|id, input| Ok(Some(Composer::with_id(id, input))));

        let service = ComposerService::new(mock);
        let updated = service.update_composer(id, input()).await.unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.last_name, "van Beethoven");
    }

    #[tokio::test]
    async fn test_update_unknown_composer_is_not_found() {
        let mut mock = MockComposerRepository::new();
        mock.expect_update().returning(|_, _| Ok(None));

        let service = ComposerService::new(mock);

        assert!(matches!(
            service.update_composer(Uuid::now_v7(), input()).await,
            Err(ComposerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_unknown_composer_is_not_found() {
        let mut mock = MockComposerRepository::new();
        mock.expect_delete().returning(|_| Ok(None));

        let service = ComposerService::new(mock);

        assert!(matches!(
            service.delete_composer(Uuid::now_v7()).await,
            Err(ComposerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_fault_propagates() {
        let mut mock = MockComposerRepository::new();
        mock.expect_list()
            .returning(|| Err(ComposerError::Store("server selection timeout".to_string())));

        let service = ComposerService::new(mock);

        assert!(matches!(
            service.list_composers().await,
            Err(ComposerError::Store(_))
        ));
    }
}
