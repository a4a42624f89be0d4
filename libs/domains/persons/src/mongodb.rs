//! MongoDB implementation of PersonRepository

use async_trait::async_trait;
use database::mongodb::id_filter;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;
use uuid::Uuid;

use crate::error::PersonResult;
use crate::models::{CreatePerson, Person};
use crate::repository::PersonRepository;

pub const PEOPLE_COLLECTION: &str = "people";

pub struct MongoPersonRepository {
    collection: Collection<Person>,
}

impl MongoPersonRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Person>(PEOPLE_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl PersonRepository for MongoPersonRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> PersonResult<Vec<Person>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let people: Vec<Person> = cursor.try_collect().await?;
        Ok(people)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> PersonResult<Option<Person>> {
        let person = self.collection.find_one(id_filter(id)).await?;
        Ok(person)
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: CreatePerson) -> PersonResult<Person> {
        let person = Person::new(input);

        self.collection.insert_one(&person).await?;

        tracing::info!(person_id = %person.id, "Person created successfully");
        Ok(person)
    }
}
