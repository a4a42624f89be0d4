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

use crate::error::PersonResult;
use crate::models::{CreatePerson, Dependent, Person, Role};
use crate::repository::PersonRepository;
use crate::service::PersonService;

/// OpenAPI documentation for Persons API
#[derive(OpenApi)]
#[openapi(
    paths(list_persons, create_person, get_person),
    components(
        schemas(Person, CreatePerson, Role, Dependent),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            StoreErrorResponse
        )
    ),
    tags(
        (name = "Persons", description = "Person records")
    )
)]
pub struct ApiDoc;

pub fn router<R: PersonRepository + 'static>(service: PersonService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_persons).post(create_person))
        .route("/{id}", get(get_person))
        .with_state(shared_service)
}

/// List all persons
#[utoipa::path(
    get,
    path = "",
    tag = "Persons",
    responses(
        (status = 200, description = "Array of person documents", body = Vec<Person>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn list_persons<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
) -> PersonResult<Json<Vec<Person>>> {
    let persons = service.list_persons().await?;
    Ok(Json(persons))
}

/// Create a person
#[utoipa::path(
    post,
    path = "",
    tag = "Persons",
    request_body = CreatePerson,
    responses(
        (status = 200, description = "Person created", body = Person),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn create_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePerson>,
) -> PersonResult<Json<Person>> {
    let person = service.create_person(input).await?;
    Ok(Json(person))
}

/// Get a person by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Persons",
    params(
        ("id" = Uuid, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Person document", body = Person),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn get_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    UuidPath(id): UuidPath,
) -> PersonResult<Json<Person>> {
    let person = service.get_person(id).await?;
    Ok(Json(person))
}
