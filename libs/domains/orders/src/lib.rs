//! Orders Domain
//!
//! Order placement persisted through a [`database::mongodb::DocumentStore`].
//! Orders are write-only: there is no read endpoint, and line items are not
//! checked against the product catalogue.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use database::mongodb::DocumentStore;
//! use domain_orders::{handlers, OrderService, StoreOrderRepository};
//!
//! # fn example(store: Arc<dyn DocumentStore>) {
//! let router = handlers::router(OrderService::new(StoreOrderRepository::new(store)));
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{CreateOrder, OrderCreated, OrderItem, OrderStatus};
pub use repository::OrderRepository;
pub use service::OrderService;
pub use store::{ORDER_COLLECTION, StoreOrderRepository};
