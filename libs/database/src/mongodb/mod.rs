//! MongoDB connector and utilities

mod config;
mod connector;
mod filters;
mod health;

pub use config::MongoConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use filters::{DUPLICATE_KEY_CODE, id_filter, is_duplicate_key};
pub use health::check_health;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
