use mongodb::{bson::doc, options::ClientOptions, Client};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{retry, retry_with_backoff, DatabaseError, DatabaseResult, RetryConfig};

async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client without talking to the server.
///
/// The driver connects on first use, so this succeeds even when the store is
/// down; individual operations then fail with [`DatabaseError::Connection`].
///
/// Parsing a `mongodb+srv://` URL resolves its SRV and TXT records, so with
/// such a URL this still needs working DNS and fails when the lookup does.
pub async fn connect_lazy(config: &MongoConfig) -> DatabaseResult<Client> {
    let options = client_options(config).await?;
    Ok(Client::with_options(options)?)
}

/// Build a client and verify the server answers a `ping`.
#[instrument(skip(config), fields(url = %config.redacted_url()))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB");

    let client = connect_lazy(config).await?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::Connection(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] wrapped in exponential backoff.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}
