//! Configuration for Shop API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_is_set, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when the store URL or database name is missing; the API then
    /// serves without a database.
    pub mongodb: Option<MongoConfig>,
    pub database_env: DatabaseEnv,
    pub server: ServerConfig,
    pub environment: Environment,
}

/// Which store variables were present at startup, as reported by `/test`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

impl DatabaseEnv {
    pub fn from_env() -> Self {
        Self {
            url_set: env_is_set("DATABASE_URL"),
            name_set: env_is_set("DATABASE_NAME"),
        }
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let mongodb = match MongoConfig::from_env() {
            Ok(config) => Some(config),
            Err(ConfigError::MissingEnvVar(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            database_env: DatabaseEnv::from_env(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
