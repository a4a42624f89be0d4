use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TeamResult;
use crate::models::{CreateTeam, Player, Team, UpdateTeam};

/// Repository trait for Team persistence
///
/// Every mutation addressed by id returns `Ok(None)` when no team has that id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn list(&self) -> TeamResult<Vec<Team>>;

    async fn get_by_id(&self, id: Uuid) -> TeamResult<Option<Team>>;

    async fn create(&self, input: CreateTeam) -> TeamResult<Team>;

    /// Set the provided fields and return the new document
    async fn update(&self, id: Uuid, input: UpdateTeam) -> TeamResult<Option<Team>>;

    /// Remove and return the deleted document
    async fn delete(&self, id: Uuid) -> TeamResult<Option<Team>>;

    /// Append to the roster and return the new document
    async fn add_player(&self, id: Uuid, player: Player) -> TeamResult<Option<Team>>;
}
