use axum::Router;
use domain_teams::{MongoTeamRepository, TeamService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoTeamRepository::new(state.db.clone());
    handlers::router(TeamService::new(repository))
}
