//! Database access for the shop services
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector and the [`mongodb::DocumentStore`] accessor
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{connect_lazy, DocumentStore, MongoConfig, MongoDocumentStore};
//! use database::mongodb::bson::doc;
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = connect_lazy(&config).await?;
//! let store = MongoDocumentStore::new(client.database(config.database()));
//!
//! let id = store.create_document("product", doc! { "title": "Backpack" }).await?;
//! let docs = store.get_documents("product", doc! {}, Some(10)).await?;
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
