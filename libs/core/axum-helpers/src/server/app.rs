use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{handle_panic, not_found};
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the Swagger UI
pub const DOCS_PATH: &str = "/api-docs";
/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Combine domain routers with documentation and cross-cutting layers.
///
/// - `apis` is nested under `/api` (state already applied by each domain)
/// - Swagger UI at [`DOCS_PATH`], OpenAPI JSON at [`OPENAPI_PATH`]
/// - JSON 404 fallback
/// - panics become the standard 500 body
/// - request tracing, security headers and response compression
/// - CORS only when `server_config.cors_allowed_origins` is non-empty
///
/// Fails when a configured CORS origin is invalid.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let router = Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = if server_config.cors_allowed_origins.is_empty() {
        router
    } else {
        info!(origins = ?server_config.cors_allowed_origins, "CORS enabled");
        router.layer(create_cors_layer(server_config.cors_allowed_origins.as_slice())?)
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serve `router` until SIGINT/SIGTERM, then drain and clean up.
///
/// After the signal, in-flight requests get `server_config.shutdown_timeout`
/// to finish. `cleanup` (closing the database client, etc.) runs after the
/// server stops, bounded by the same timeout.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_timeout = server_config.shutdown_timeout;
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let signal_task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.wait_for_signal().await })
    };

    let graceful = {
        let coordinator = coordinator.clone();
        async move { coordinator.notified().await }
    };
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(graceful)
        .into_future();
    tokio::pin!(server);

    let drain_deadline = async {
        coordinator.notified().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    let serve_result = tokio::select! {
        result = &mut server => result,
        _ = drain_deadline => {
            warn!(timeout = ?shutdown_timeout, "In-flight requests did not drain in time");
            Ok(())
        }
    };
    if let Err(ref e) = serve_result {
        tracing::error!(error = %e, "Server encountered an error");
    }
    signal_task.abort();

    info!(timeout = ?shutdown_timeout, "Running cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup exceeded timeout"),
    }

    serve_result
}
