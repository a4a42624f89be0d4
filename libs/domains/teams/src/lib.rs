//! Teams Domain
//!
//! Teams in the `teams` collection, each with an embedded, ordered roster of
//! players. Players have no identity of their own; they are only reachable
//! through their team.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{TeamError, TeamResult};
pub use handlers::ApiDoc;
pub use models::{CreateTeam, Player, Team, UpdateTeam};
pub use mongodb::MongoTeamRepository;
pub use repository::TeamRepository;
pub use service::TeamService;
