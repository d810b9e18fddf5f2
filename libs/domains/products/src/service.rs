//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductCreated, ProductFilter, ProductQuery, SeedResult};
use crate::repository::ProductRepository;
use crate::seed::sample_products;

/// Product service: validates input and delegates to the repository
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ProductCreated> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let id = self.repository.create(input).await?;
        Ok(ProductCreated { id })
    }

    /// List products. `limit` defaults to 50 and must lie in `1..=1000`.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let filter = ProductFilter::try_from(query)?;
        self.repository.list(filter).await
    }

    /// Insert the sample catalogue, one product at a time.
    ///
    /// Not idempotent: every call adds four new records. A failure part-way
    /// leaves the products inserted before it in place.
    #[instrument(skip(self))]
    pub async fn seed_products(&self) -> ProductResult<SeedResult> {
        let mut ids = Vec::new();
        for product in sample_products() {
            ids.push(self.repository.create(product).await?);
        }

        tracing::info!(inserted = ids.len(), "Sample products seeded");
        Ok(SeedResult {
            inserted: ids.len(),
            ids,
        })
    }
}
