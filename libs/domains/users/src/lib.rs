//! Users Domain
//!
//! Account signup and login backed by MongoDB.
//!
//! - Argon2id hashing with a configurable work factor, off the async executor
//! - `userName` uniqueness enforced by a unique index, with a lookup fast path
//! - Stored [`User`] and public [`UserResponse`] are distinct types
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /signup, POST /login
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Credential checks, hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Stored entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::hashing::HashingConfig;
//! use domain_users::{CredentialHasher, InMemoryUserRepository, UserService, handlers};
//!
//! # fn example() -> Result<(), domain_users::UserError> {
//! let hasher = CredentialHasher::new(HashingConfig::default())?;
//! let service = UserService::new(InMemoryUserRepository::new(), hasher);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod password;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{LoginOutcome, LoginRequest, LoginResponse, SignupRequest, User, UserResponse};
pub use mongodb::MongoUserRepository;
pub use password::CredentialHasher;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
