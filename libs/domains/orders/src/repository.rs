use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::CreateOrder;

/// Repository trait for Order persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order and return its new identifier
    async fn create(&self, input: CreateOrder) -> OrderResult<String>;
}
