use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PersonResult;
use crate::models::{CreatePerson, Person};

/// Repository trait for Person persistence (create and read only)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn list(&self) -> PersonResult<Vec<Person>>;

    async fn get_by_id(&self, id: Uuid) -> PersonResult<Option<Person>>;

    async fn create(&self, input: CreatePerson) -> PersonResult<Person>;
}
