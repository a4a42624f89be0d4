//! API routes module
//!
//! Wires each domain to its MongoDB repository and HTTP routes.

pub mod composers;
pub mod health;
pub mod persons;
pub mod teams;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All API routes. Nested under `/api` by `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new()
        .nest("/composers", composers::router(state))
        .nest("/persons", persons::router(state))
        .nest("/teams", teams::router(state))
        .merge(users::router(state)?))
}
