use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return its new identifier
    async fn create(&self, input: CreateProduct) -> ProductResult<String>;

    /// List products matching `filter`, in store order
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;
}
