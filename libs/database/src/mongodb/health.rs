use std::time::Instant;

use super::DocumentStore;

/// Outcome of a store ping
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error text when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

pub async fn check_health(store: &dyn DocumentStore) -> bool {
    store.ping().await.is_ok()
}

/// Ping the store and record latency and any error message.
pub async fn check_health_detailed(store: &dyn DocumentStore) -> HealthStatus {
    let start = Instant::now();
    let result = store.ping().await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongodb::{connect_lazy, MongoConfig, MongoDocumentStore};

    #[tokio::test]
    async fn test_check_health_detailed_unreachable() {
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "shop")
            .with_server_selection_timeout(1);
        let client = connect_lazy(&config).await.unwrap();
        let store = MongoDocumentStore::new(client.database("shop"));

        let status = check_health_detailed(&store).await;
        assert!(!status.healthy);
        assert!(status.message.is_some());
        assert!(!check_health(&store).await);
    }
}
