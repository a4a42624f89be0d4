use axum_helpers::{create_production_app, create_router, health_router, set_expose_error_details};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);
    set_expose_error_details(config.expose_error_details);

    info!(url = %config.mongodb.redacted_url(), "Connecting to MongoDB");

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(database = config.mongodb.database(), "Connected to MongoDB");

    api::users::init_indexes(&db).await?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let api_routes = api::routes(&state)?;

    let app = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting API"
    );

    let server_config = state.config.server.clone();
    let mongo_client = state.mongo_client.clone();
    create_production_app(app, &server_config, async move {
        info!("Closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await?;

    info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::{Environment, app_info, hashing::HashingConfig, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    /// Full router over a client that is never asked to reach a server.
    async fn app() -> Router {
        let mongodb = MongoConfig::with_database("mongodb://localhost:27017", "web420DB");
        let mongo_client = mongodb::Client::with_uri_str(mongodb.url()).await.unwrap();
        let db = mongo_client.database(mongodb.database());
        let state = AppState {
            config: Config {
                app: app_info!(),
                environment: Environment::Development,
                server: ServerConfig::default(),
                mongodb,
                hashing: HashingConfig::default(),
                expose_error_details: true,
            },
            mongo_client,
            db,
        };

        create_router::<openapi::ApiDoc>(api::routes(&state).unwrap(), &state.config.server)
            .unwrap()
            .merge(health_router(state.config.app))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_domain_routes_are_mounted_under_api() {
        for uri in [
            "/api/composers/not-a-uuid",
            "/api/persons/not-a-uuid",
            "/api/teams/not-a-uuid",
            "/api/teams/not-a-uuid/players",
        ] {
            let (status, body) = get(app().await, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "INVALID_UUID", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_liveness_reports_package() {
        let (status, body) = get(app().await, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "web420_api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get(app().await, "/api/nothing-here").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "ROUTE_NOT_FOUND");
    }
}
