//! MongoDB implementation of ComposerRepository

use async_trait::async_trait;
use database::mongodb::id_filter;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::doc,
    options::{FindOneAndReplaceOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ComposerResult;
use crate::models::{Composer, ComposerInput};
use crate::repository::ComposerRepository;

pub const COMPOSERS_COLLECTION: &str = "composers";

/// MongoDB implementation of the ComposerRepository
pub struct MongoComposerRepository {
    collection: Collection<Composer>,
}

impl MongoComposerRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Composer>(COMPOSERS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl ComposerRepository for MongoComposerRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ComposerResult<Vec<Composer>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let composers: Vec<Composer> = cursor.try_collect().await?;
        Ok(composers)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ComposerResult<Option<Composer>> {
        let composer = self.collection.find_one(id_filter(id)).await?;
        Ok(composer)
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: ComposerInput) -> ComposerResult<Composer> {
        let composer = Composer::new(input);

        self.collection.insert_one(&composer).await?;

        tracing::info!(composer_id = %composer.id, "Composer created successfully");
        Ok(composer)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: ComposerInput) -> ComposerResult<Option<Composer>> {
        let replacement = Composer::with_id(id, input);
        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_replace(id_filter(id), &replacement)
            .with_options(options)
            .await?;

        if updated.is_some() {
            tracing::info!(composer_id = %id, "Composer updated successfully");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ComposerResult<Option<Composer>> {
        let deleted = self.collection.find_one_and_delete(id_filter(id)).await?;

        if deleted.is_some() {
            tracing::info!(composer_id = %id, "Composer deleted successfully");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::to_raw_document_buf;
    use test_utils::assertions::{assert_some, assert_uuid_eq};
    use test_utils::{TestDataBuilder, TestMongo};

    fn input(first: &str, last: &str) -> ComposerInput {
        ComposerInput {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_id_filter_matches_stored_composer() {
        let id = TestDataBuilder::new(7).id();
        let composer = Composer::with_id(id, input("Clara", "Schumann"));
        let stored = to_raw_document_buf(&composer).unwrap().to_document().unwrap();

        assert_eq!(id_filter(id).get("_id"), stored.get("_id"));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_composer_lifecycle() {
        let mongo = TestMongo::new().await;
        let repo = MongoComposerRepository::new(mongo.database());

        let created = repo.create(input("Johann", "Bach")).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec![created.clone()]);

        let fetched = assert_some(repo.get_by_id(created.id).await.unwrap(), "get_by_id");
        assert_eq!(fetched, created);

        let updated = repo
            .update(created.id, input("Johann Sebastian", "Bach"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.first_name, "Johann Sebastian");
        assert_uuid_eq(updated.id, created.id, "replace keeps the id");

        let deleted = repo.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted, updated);
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_mutations_on_unknown_id_touch_nothing() {
        let mongo = TestMongo::new().await;
        let repo = MongoComposerRepository::new(mongo.database());
        let existing = repo.create(input("Clara", "Schumann")).await.unwrap();

        let missing = Uuid::now_v7();
        assert!(repo.update(missing, input("X", "Y")).await.unwrap().is_none());
        assert!(repo.delete(missing).await.unwrap().is_none());
        assert_eq!(repo.list().await.unwrap(), vec![existing]);
    }
}
