//! Persons Domain
//!
//! Create and read person records (with ordered embedded roles and
//! dependents) in the `people` collection. Persons are never updated or
//! deleted through the API.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{PersonError, PersonResult};
pub use handlers::ApiDoc;
pub use models::{CreatePerson, Dependent, Person, Role};
pub use mongodb::MongoPersonRepository;
pub use repository::PersonRepository;
pub use service::PersonService;
