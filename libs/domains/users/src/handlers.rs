use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        InvalidCredentialsResponse, StoreErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{LoginOutcome, LoginRequest, LoginResponse, SignupRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the signup/login API
#[derive(OpenApi)]
#[openapi(
    paths(signup, login),
    components(
        schemas(SignupRequest, LoginRequest, LoginResponse, UserResponse),
        responses(
            BadRequestValidationResponse,
            ConflictResponse,
            InvalidCredentialsResponse,
            InternalServerErrorResponse,
            StoreErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "Account signup and login")
    )
)]
pub struct ApiDoc;

/// `POST /signup` and `POST /login`
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .with_state(shared_service)
}

/// Create an account
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Users",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created; the password hash is never returned", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn signup<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<SignupRequest>,
) -> UserResult<Json<UserResponse>> {
    let user = service.signup(input).await?;
    Ok(Json(user))
}

/// Check a username/password pair
#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = InvalidCredentialsResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = StoreErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    match service.login(input).await? {
        LoginOutcome::LoggedIn { .. } => Ok(Json(LoginResponse::logged_in())),
    }
}
