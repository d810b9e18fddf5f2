//! Products Domain
//!
//! Product catalogue persisted through a [`database::mongodb::DocumentStore`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + document store implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use database::mongodb::{connect_lazy, MongoConfig, MongoDocumentStore};
//! use domain_products::{handlers, ProductService, StoreProductRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = connect_lazy(&config).await?;
//! let store = Arc::new(MongoDocumentStore::new(client.database(config.database())));
//!
//! let service = ProductService::new(StoreProductRepository::new(store));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, DEFAULT_LIMIT, MAX_LIMIT, Product, ProductCreated, ProductFilter, ProductQuery,
    SeedResult,
};
pub use repository::ProductRepository;
pub use seed::sample_products;
pub use service::ProductService;
pub use store::{PRODUCT_COLLECTION, StoreProductRepository};
