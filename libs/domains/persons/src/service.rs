use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{PersonError, PersonResult};
use crate::models::{CreatePerson, Person};
use crate::repository::PersonRepository;

pub struct PersonService<R: PersonRepository> {
    repository: Arc<R>,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_persons(&self) -> PersonResult<Vec<Person>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_person(&self, id: Uuid) -> PersonResult<Person> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn create_person(&self, input: CreatePerson) -> PersonResult<Person> {
        self.repository.create(input).await
    }
}

impl<R: PersonRepository> Clone for PersonService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
