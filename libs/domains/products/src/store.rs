//! [`ProductRepository`] over a [`DocumentStore`]

use async_trait::async_trait;
use database::mongodb::{DocumentStore, ID_FIELD, identifier_to_string};
use database::mongodb::bson::{Document, doc};
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Collection holding product records.
pub const PRODUCT_COLLECTION: &str = "product";

pub struct StoreProductRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl StoreProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_collection(store, PRODUCT_COLLECTION)
    }

    pub fn with_collection(store: Arc<dyn DocumentStore>, collection: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
        }
    }

    /// Build the store filter. The title search is a literal substring, so
    /// regex metacharacters in it are escaped.
    pub fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref category) = filter.category {
            doc.insert("category", category);
        }

        if let Some(ref needle) = filter.title_contains {
            doc.insert(
                "title",
                doc! { "$regex": regex::escape(needle), "$options": "i" },
            );
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: CreateProduct) -> ProductResult<String> {
        let id = self
            .store
            .create_document(&self.collection, input.to_document()?)
            .await?;

        tracing::info!(product_id = %id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let documents = self
            .store
            .get_documents(
                &self.collection,
                Self::build_filter(&filter),
                Some(filter.limit),
            )
            .await?;

        // The collection is shared with other writers; records that do not
        // decode as a product are left out of the listing.
        let products = documents
            .into_iter()
            .filter_map(|document| {
                let id = document
                    .get(ID_FIELD)
                    .map(identifier_to_string)
                    .unwrap_or_default();
                match Product::from_document(document) {
                    Ok(product) => Some(product),
                    Err(e) => {
                        tracing::warn!(record_id = %id, error = %e, "Skipping malformed product record");
                        None
                    }
                }
            })
            .collect();

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(
            StoreProductRepository::build_filter(&ProductFilter::default()),
            doc! {}
        );
    }

    #[test]
    fn test_filter_combines_category_and_title() {
        let filter = ProductFilter {
            category: Some("Electronics".to_string()),
            title_contains: Some("watch".to_string()),
            limit: 10,
        };

        assert_eq!(
            StoreProductRepository::build_filter(&filter),
            doc! {
                "category": "Electronics",
                "title": { "$regex": "watch", "$options": "i" },
            }
        );
    }

    #[test]
    fn test_title_search_escapes_metacharacters() {
        let filter = ProductFilter {
            title_contains: Some("c++ (2nd ed.)".to_string()),
            ..Default::default()
        };

        let built = StoreProductRepository::build_filter(&filter);
        let pattern = built
            .get_document("title")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(pattern, r"c\+\+ \(2nd ed\.\)");
    }
}
