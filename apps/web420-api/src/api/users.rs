//! Signup and login routes

use axum::Router;
use domain_users::{CredentialHasher, MongoUserRepository, UserService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Fails when the configured hashing parameters are rejected by Argon2.
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let hasher = CredentialHasher::new(state.config.hashing)?;
    let repository = MongoUserRepository::new(state.db.clone());
    Ok(handlers::router(UserService::new(repository, hasher)))
}

/// Create the unique `userName` index before accepting signups.
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoUserRepository::new(db.clone()).init_indexes().await?;
    Ok(())
}
