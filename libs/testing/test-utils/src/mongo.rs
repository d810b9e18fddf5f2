//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs MongoDB in a container.

use database::mongodb::{MongoConfig, MongoDocumentStore, connect_from_config};
use database::mongodb::{Client, Database};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper
///
/// The container is stopped and removed when this struct is dropped.
///
/// ```no_run
/// use test_utils::TestMongo;
/// use database::mongodb::DocumentStore;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let store = mongo.store();
/// store.ping().await.unwrap();
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
    pub database_name: String,
}

impl TestMongo {
    /// Start a MongoDB container and connect to it.
    pub async fn new() -> Self {
        Self::with_database("shop_test").await
    }

    pub async fn with_database(database_name: &str) -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);
        let config = MongoConfig::with_database(&connection_string, database_name);

        let client = connect_from_config(&config)
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready");

        Self {
            container,
            client,
            connection_string,
            database_name: database_name.to_string(),
        }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn database(&self) -> Database {
        self.client.database(&self.database_name)
    }

    /// A [`MongoDocumentStore`] over the test database.
    pub fn store(&self) -> MongoDocumentStore {
        MongoDocumentStore::new(self.database())
    }
}
