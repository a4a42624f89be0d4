//! Team Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TeamError, TeamResult};
use crate::models::{CreateTeam, Player, Team, UpdateTeam};
use crate::repository::TeamRepository;

pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_teams(&self) -> TeamResult<Vec<Team>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_team(&self, id: Uuid) -> TeamResult<Team> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn create_team(&self, input: CreateTeam) -> TeamResult<Team> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_team(&self, id: Uuid, input: UpdateTeam) -> TeamResult<Team> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_team(&self, id: Uuid) -> TeamResult<Team> {
        self.repository
            .delete(id)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    #[instrument(skip(self, player))]
    pub async fn assign_player(&self, id: Uuid, player: Player) -> TeamResult<Team> {
        self.repository
            .add_player(id, player)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_players(&self, id: Uuid) -> TeamResult<Vec<Player>> {
        Ok(self.get_team(id).await?.players)
    }
}

impl<R: TeamRepository> Clone for TeamService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
