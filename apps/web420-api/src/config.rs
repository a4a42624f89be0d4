use core_config::{AppInfo, FromEnv, app_info, env_flag, hashing::HashingConfig, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub hashing: HashingConfig,
    /// Append fault details to 500/501 messages
    pub expose_error_details: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let mongodb = MongoConfig::from_env()?;
        let hashing = HashingConfig::from_env()?;
        let expose_error_details =
            env_flag("EXPOSE_ERROR_DETAILS", !environment.is_production())?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            mongodb,
            hashing,
            expose_error_details,
        })
    }
}
