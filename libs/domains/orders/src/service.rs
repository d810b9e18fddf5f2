//! Order Service

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, OrderCreated};
use crate::repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store an order. The total is taken as given.
    #[instrument(skip(self, input), fields(customer = %input.customer_email))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<OrderCreated> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let id = self.repository.create(input).await?;
        Ok(OrderCreated { id })
    }
}
