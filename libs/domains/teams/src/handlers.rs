use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, StoreErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TeamResult;
use crate::models::{CreateTeam, Player, Team, UpdateTeam};
use crate::repository::TeamRepository;
use crate::service::TeamService;

/// OpenAPI documentation for Teams API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_teams,
        create_team,
        get_team,
        update_team,
        delete_team,
        assign_player,
        list_players,
    ),
    components(
        schemas(Team, CreateTeam, UpdateTeam, Player),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            StoreErrorResponse
        )
    ),
    tags(
        (name = "Teams", description = "Teams and their player rosters")
    )
)]
pub struct ApiDoc;

pub fn router<R: TeamRepository + 'static>(service: TeamService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/{id}", get(get_team).put(update_team).delete(delete_team))
        .route("/{id}/players", get(list_players).post(assign_player))
        .with_state(shared_service)
}

/// List all teams
#[utoipa::path(
    get,
    path = "",
    tag = "Teams",
    responses(
        (status = 200, description = "Array of team documents", body = Vec<Team>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn list_teams<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
) -> TeamResult<Json<Vec<Team>>> {
    let teams = service.list_teams().await?;
    Ok(Json(teams))
}

/// Create a team
#[utoipa::path(
    post,
    path = "",
    tag = "Teams",
    request_body = CreateTeam,
    responses(
        (status = 200, description = "Team created", body = Team),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn create_team<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTeam>,
) -> TeamResult<Json<Team>> {
    let team = service.create_team(input).await?;
    Ok(Json(team))
}

/// Get a team by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Teams",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team document", body = Team),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn get_team<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
) -> TeamResult<Json<Team>> {
    let team = service.get_team(id).await?;
    Ok(Json(team))
}

/// Update a team's name and/or mascot
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Teams",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    request_body = UpdateTeam,
    responses(
        (status = 200, description = "Updated team document", body = Team),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn update_team<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTeam>,
) -> TeamResult<Json<Team>> {
    let team = service.update_team(id, input).await?;
    Ok(Json(team))
}

/// Delete a team
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Teams",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "The deleted team document", body = Team),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn delete_team<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
) -> TeamResult<Json<Team>> {
    let team = service.delete_team(id).await?;
    Ok(Json(team))
}

/// Add a player to the end of a team's roster
#[utoipa::path(
    post,
    path = "/{id}/players",
    tag = "Teams",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    request_body = Player,
    responses(
        (status = 200, description = "Team document including the new player", body = Team),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn assign_player<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(player): ValidatedJson<Player>,
) -> TeamResult<Json<Team>> {
    let team = service.assign_player(id, player).await?;
    Ok(Json(team))
}

/// List a team's players
#[utoipa::path(
    get,
    path = "/{id}/players",
    tag = "Teams",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Roster in assignment order", body = Vec<Player>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn list_players<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
) -> TeamResult<Json<Vec<Player>>> {
    let players = service.list_players(id).await?;
    Ok(Json(players))
}
