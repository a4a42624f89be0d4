//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into each router (cheap Arc clones).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Owns the connection pool; shut down explicitly on exit
    pub mongo_client: Client,
    pub db: Database,
}
