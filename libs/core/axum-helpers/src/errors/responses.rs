//! Reusable OpenAPI responses matching the [`AppError`](super::AppError) status convention.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "user_name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_UUID",
        "message": "Invalid UUID format"
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unknown id (domain rejection)",
    content_type = "application/json",
    example = json!({
        "code": 1101,
        "error": "NOT_FOUND",
        "message": "Invalid composerId"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict with an existing record (domain rejection)",
    content_type = "application/json",
    example = json!({
        "code": 1102,
        "error": "CONFLICT",
        "message": "Username is already in use."
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unknown user or wrong password (domain rejection)",
    content_type = "application/json",
    example = json!({
        "code": 1103,
        "error": "INVALID_CREDENTIALS",
        "message": "Invalid username and/or password."
    })
)]
pub struct InvalidCredentialsResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Server Exception",
    content_type = "application/json",
    example = json!({
        "code": 5001,
        "error": "INTERNAL_ERROR",
        "message": "Server Exception: An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "MongoDB Exception",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "STORE_ERROR",
        "message": "MongoDB Exception: A database error occurred"
    })
)]
pub struct StoreErrorResponse(pub ErrorResponse);
