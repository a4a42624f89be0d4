//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`errors`]**: [`AppError`] and the status convention (400 malformed input,
//!   401 domain rejection, 500 unexpected fault, 501 store fault)
//! - **[`extractors`]**: [`UuidPath`] and [`ValidatedJson`]
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly with Swagger UI, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse, set_expose_error_details};
pub use extractors::{UuidPath, ValidatedJson};
pub use http::{create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};
