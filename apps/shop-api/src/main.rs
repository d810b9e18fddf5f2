//! Shop API - REST server

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{DocumentStore, MongoDocumentStore};
use std::sync::Arc;
use std::time::Duration;
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

    let mongo_client = state::connect(config.mongodb.as_ref()).await;
    let store = mongo_client
        .as_ref()
        .zip(config.mongodb.as_ref())
        .map(|(client, mongodb)| {
            Arc::new(MongoDocumentStore::new(client.database(mongodb.database())))
                as Arc<dyn DocumentStore>
        });

    let state = AppState {
        config: Arc::new(config),
        store,
    };

    let routes = api::routes(&state).merge(health_router(state.config.app));
    let app = create_router::<openapi::ApiDoc>(routes)?;

    info!("Starting Shop API on port {}", state.config.server.port);

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                client.shutdown().await;
                info!("MongoDB connection closed");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}
