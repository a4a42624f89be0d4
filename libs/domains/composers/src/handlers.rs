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

use crate::error::ComposerResult;
use crate::models::{Composer, ComposerInput};
use crate::repository::ComposerRepository;
use crate::service::ComposerService;

/// OpenAPI documentation for Composers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_composers,
        create_composer,
        get_composer,
        update_composer,
        delete_composer,
    ),
    components(
        schemas(Composer, ComposerInput),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            StoreErrorResponse
        )
    ),
    tags(
        (name = "Composers", description = "Composer management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the composers router with all HTTP endpoints
pub fn router<R: ComposerRepository + 'static>(service: ComposerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_composers).post(create_composer))
        .route(
            "/{id}",
            get(get_composer).put(update_composer).delete(delete_composer),
        )
        .with_state(shared_service)
}

/// List all composers
#[utoipa::path(
    get,
    path = "",
    tag = "Composers",
    responses(
        (status = 200, description = "Array of composer documents", body = Vec<Composer>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn list_composers<R: ComposerRepository>(
    State(service): State<Arc<ComposerService<R>>>,
) -> ComposerResult<Json<Vec<Composer>>> {
    let composers = service.list_composers().await?;
    Ok(Json(composers))
}

/// Create a composer
#[utoipa::path(
    post,
    path = "",
    tag = "Composers",
    request_body = ComposerInput,
    responses(
        (status = 200, description = "Composer created", body = Composer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn create_composer<R: ComposerRepository>(
    State(service): State<Arc<ComposerService<R>>>,
    ValidatedJson(input): ValidatedJson<ComposerInput>,
) -> ComposerResult<Json<Composer>> {
    let composer = service.create_composer(input).await?;
    Ok(Json(composer))
}

/// Get a composer by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Composers",
    params(
        ("id" = Uuid, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "Composer document", body = Composer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn get_composer<R: ComposerRepository>(
    State(service): State<Arc<ComposerService<R>>>,
    UuidPath(id): UuidPath,
) -> ComposerResult<Json<Composer>> {
    let composer = service.get_composer(id).await?;
    Ok(Json(composer))
}

/// Replace a composer's names
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Composers",
    params(
        ("id" = Uuid, Path, description = "Composer id")
    ),
    request_body = ComposerInput,
    responses(
        (status = 200, description = "Updated composer document", body = Composer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn update_composer<R: ComposerRepository>(
    State(service): State<Arc<ComposerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ComposerInput>,
) -> ComposerResult<Json<Composer>> {
    let composer = service.update_composer(id, input).await?;
    Ok(Json(composer))
}

/// Delete a composer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Composers",
    params(
        ("id" = Uuid, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "The deleted composer document", body = Composer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn delete_composer<R: ComposerRepository>(
    State(service): State<Arc<ComposerService<R>>>,
    UuidPath(id): UuidPath,
) -> ComposerResult<Json<Composer>> {
    let composer = service.delete_composer(id).await?;
    Ok(Json(composer))
}
