//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

pub const USERS_COLLECTION: &str = "users";
pub const USER_NAME_INDEX: &str = "idx_user_name_unique";

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<User>(USERS_COLLECTION);
        Self { collection }
    }

    /// Ensure the unique index on `userName` exists.
    ///
    /// Must run before serving: it is the only guard against two concurrent
    /// signups claiming the same name.
    #[instrument(skip(self))]
    pub async fn init_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "userName": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(USER_NAME_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(index = USER_NAME_INDEX, "User indexes ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_by_user_name(&self, user_name: &str) -> UserResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "userName": user_name })
            .await?;
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_name = %user.user_name))]
    async fn create(&self, user: User) -> UserResult<User> {
        match self.collection.insert_one(&user).await {
            Ok(_) => {
                tracing::info!(user_id = %user.id, "User created successfully");
                Ok(user)
            }
            Err(e) if is_duplicate_key(&e) => Err(UserError::UsernameTaken(user.user_name)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{TestDataBuilder, TestMongo};

    fn user(name: &str) -> User {
        User::new(
            name.to_string(),
            "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".to_string(),
            format!("{}@example.com", name),
        )
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_create_and_find_by_user_name() {
        let mongo = TestMongo::new().await;
        let repo = MongoUserRepository::new(mongo.database());
        repo.init_indexes().await.unwrap();
        let name = TestDataBuilder::from_test_name("test_create_and_find_by_user_name")
            .user_name("carl");

        let created = repo.create(user(&name)).await.unwrap();
        let found = repo.find_by_user_name(&name).await.unwrap().unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.password, created.password);
        assert!(
            repo.find_by_user_name(&name.to_uppercase())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unique_index_rejects_duplicate_user_name() {
        let mongo = TestMongo::new().await;
        let repo = MongoUserRepository::new(mongo.database());
        repo.init_indexes().await.unwrap();

        repo.create(user("carl")).await.unwrap();
        let result = repo.create(user("carl")).await;

        assert!(matches!(result, Err(UserError::UsernameTaken(_))));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_init_indexes_is_idempotent() {
        let mongo = TestMongo::new().await;
        let repo = MongoUserRepository::new(mongo.database());

        repo.init_indexes().await.unwrap();
        repo.init_indexes().await.unwrap();
    }
}
