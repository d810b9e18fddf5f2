//! Application state management

use database::common::RetryConfig;
use database::mongodb::{
    Client, DocumentStore, MongoConfig, UnconfiguredDocumentStore, connect_from_config_with_retry,
    connect_lazy,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    /// `None` when the API runs without a database
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    /// Store handed to the domain routers.
    ///
    /// Without a database every call fails with a connection error, so data
    /// endpoints answer 500.
    pub fn document_store(&self) -> Arc<dyn DocumentStore> {
        match &self.store {
            Some(store) => store.clone(),
            None => Arc::new(UnconfiguredDocumentStore),
        }
    }
}

/// Open the MongoDB client, keeping the API up whenever possible.
///
/// An unreachable server still yields a lazily-connected client. `None` means
/// there is no usable client at all: the settings are missing, or the URL
/// could not be turned into client options (a malformed URL, or a
/// `mongodb+srv://` host whose SRV record cannot be resolved right now).
pub async fn connect(config: Option<&MongoConfig>) -> Option<Client> {
    let Some(config) = config else {
        warn!("DATABASE_URL / DATABASE_NAME not set, serving without a database");
        return None;
    };

    info!("Connecting to MongoDB at {}", config.redacted_url());
    let startup_retry = RetryConfig::new().with_max_retries(2);

    match connect_from_config_with_retry(config, Some(startup_retry)).await {
        Ok(client) => {
            info!(
                "Successfully connected to MongoDB database: {}",
                config.database()
            );
            return Some(client);
        }
        Err(e) => {
            warn!(error = %e, "MongoDB unreachable at startup, continuing without a verified connection")
        }
    }

    match connect_lazy(config).await {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, "Could not build a MongoDB client, serving without a database");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DatabaseEnv, Environment};
    use core_config::{AppInfo, server::ServerConfig};

    #[tokio::test]
    async fn test_connect_without_settings_yields_no_client() {
        assert!(connect(None).await.is_none());
    }

    #[tokio::test]
    async fn test_connect_with_unusable_url_yields_no_client() {
        let config = MongoConfig::with_database("not-a-mongo-url", "shop");
        assert!(connect(Some(&config)).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_store_falls_back_to_unconfigured() {
        let state = AppState {
            config: Arc::new(Config {
                app: AppInfo {
                    name: "shop_api",
                    version: "0.0.0",
                },
                mongodb: None,
                database_env: DatabaseEnv::default(),
                server: ServerConfig::new("127.0.0.1".to_string(), 0),
                environment: Environment::Development,
            }),
            store: None,
        };

        let err = state.document_store().ping().await.unwrap_err();
        assert!(err.is_connection());
    }
}
