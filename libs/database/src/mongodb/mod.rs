//! MongoDB connector and document store
//!
//! Provides connection management plus the [`DocumentStore`] accessor the
//! domain crates persist through.

mod config;
mod connector;
mod documents;
mod health;

pub use config::MongoConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, connect_lazy};
pub use documents::{
    CREATED_AT_FIELD, DocumentStore, ID_FIELD, MongoDocumentStore, NOT_CONFIGURED_MESSAGE,
    UPDATED_AT_FIELD, UnconfiguredDocumentStore, identifier_to_string, prepare_for_insert,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::bson;
pub use mongodb::{Client, Database};
