//! Composers Domain
//!
//! Full CRUD over the `composers` collection.
//!
//! ```rust,no_run
//! use domain_composers::{ComposerService, MongoComposerRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let service = ComposerService::new(MongoComposerRepository::new(client.database("web420DB")));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ComposerError, ComposerResult};
pub use handlers::ApiDoc;
pub use models::{Composer, ComposerInput};
pub use mongodb::MongoComposerRepository;
pub use repository::ComposerRepository;
pub use service::ComposerService;
