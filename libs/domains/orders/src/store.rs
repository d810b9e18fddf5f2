//! [`OrderRepository`] over a [`DocumentStore`]

use async_trait::async_trait;
use database::mongodb::DocumentStore;
use std::sync::Arc;
use tracing::instrument;

use crate::error::OrderResult;
use crate::models::CreateOrder;
use crate::repository::OrderRepository;

/// Collection holding order records.
pub const ORDER_COLLECTION: &str = "order";

pub struct StoreOrderRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoreOrderRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    #[instrument(skip(self, input), fields(items = input.items.len(), status = %input.status))]
    async fn create(&self, input: CreateOrder) -> OrderResult<String> {
        let id = self
            .store
            .create_document(ORDER_COLLECTION, input.to_document()?)
            .await?;

        tracing::info!(order_id = %id, "Order created");
        Ok(id)
    }
}
