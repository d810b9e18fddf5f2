use database::mongodb::bson::{self, Bson, DateTime, Document};
use database::mongodb::identifier_to_string;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Default number of products returned by a listing.
pub const DEFAULT_LIMIT: i64 = 50;
/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 1000;

/// Product as stored in and read from the `product` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier (24-char hex ObjectId)
    #[schema(example = "65f0c1a2b3c4d5e6f7a8b9c0")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    /// RFC 3339 timestamp; absent on records written without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Shape of a stored record before `_id` is rendered as a string
#[derive(Deserialize)]
struct StoredProduct {
    #[serde(rename = "_id")]
    id: Bson,
    title: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    category: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime>,
    #[serde(default)]
    updated_at: Option<DateTime>,
}

fn rfc3339(ts: Option<DateTime>) -> Option<String> {
    ts.and_then(|t| t.try_to_rfc3339_string().ok())
}

impl Product {
    /// Convert a raw store record, renaming `_id` to a string `id`.
    pub fn from_document(document: Document) -> ProductResult<Self> {
        let stored: StoredProduct = bson::from_document(document)
            .map_err(|e| ProductError::Query(format!("Malformed product record: {}", e)))?;

        Ok(Self {
            id: identifier_to_string(&stored.id),
            title: stored.title,
            description: stored.description,
            price: stored.price,
            category: stored.category,
            image: stored.image,
            created_at: rfc3339(stored.created_at),
            updated_at: rfc3339(stored.updated_at),
        })
    }
}

/// DTO for creating a new product
///
/// Unknown fields (including any client-chosen `_id` or `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Smart Watch")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    #[schema(example = 199.0)]
    pub price: f64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Electronics")]
    pub category: String,
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CreateProduct {
    pub fn to_document(&self) -> ProductResult<Document> {
        bson::to_document(self)
            .map_err(|e| ProductError::Query(format!("Failed to encode product: {}", e)))
    }
}

/// Query string accepted by `GET /api/products`
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of the title
    pub q: Option<String>,
    /// Maximum number of results (1-1000, default 50)
    pub limit: Option<i64>,
}

/// Normalized listing criteria handed to the repository
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub title_contains: Option<String>,
    pub limit: i64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            title_contains: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<ProductQuery> for ProductFilter {
    type Error = ProductError;

    fn try_from(query: ProductQuery) -> ProductResult<Self> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ProductError::Validation(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            )));
        }

        Ok(Self {
            category: non_empty(query.category),
            title_contains: non_empty(query.q),
            limit,
        })
    }
}

/// Response body for a created product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = "65f0c1a2b3c4d5e6f7a8b9c0")]
    pub id: String,
}

/// Response body for `POST /api/products/seed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeedResult {
    pub inserted: usize,
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::bson::{doc, oid::ObjectId};

    fn watch() -> CreateProduct {
        CreateProduct {
            title: "Smart Watch".to_string(),
            description: None,
            price: 199.0,
            category: "Electronics".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_create_product_validation() {
        assert!(watch().validate().is_ok());

        let mut negative = watch();
        negative.price = -0.01;
        assert!(negative.validate().is_err());

        let mut untitled = watch();
        untitled.title = String::new();
        assert!(untitled.validate().is_err());

        let mut bad_image = watch();
        bad_image.image = Some("not a url".to_string());
        assert!(bad_image.validate().is_err());
    }

    #[test]
    fn test_create_product_ignores_client_id() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "_id": "client-chosen",
            "id": "also-ignored",
            "title": "Backpack",
            "price": 39.95,
            "category": "Bags"
        }))
        .unwrap();

        let document = input.to_document().unwrap();
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("id"));
        assert!(!document.contains_key("description"));
    }

    #[test]
    fn test_from_document_renames_id() {
        let oid = ObjectId::new();
        let product = Product::from_document(doc! {
            "_id": oid,
            "title": "Backpack",
            "price": 39.95,
            "category": "Bags",
            "created_at": DateTime::from_millis(0),
        })
        .unwrap();

        assert_eq!(product.id, oid.to_hex());
        assert_eq!(product.description, None);
        assert_eq!(product.created_at.as_deref(), Some("1970-01-01T00:00:00Z"));
        assert_eq!(product.updated_at, None);
    }

    #[test]
    fn test_from_document_accepts_integer_price() {
        let product = Product::from_document(doc! {
            "_id": ObjectId::new(),
            "title": "Gift Card",
            "price": 25,
            "category": "Gifts",
        })
        .unwrap();

        assert_eq!(product.price, 25.0);
    }

    #[test]
    fn test_from_document_rejects_missing_title() {
        let err = Product::from_document(doc! { "_id": ObjectId::new(), "price": 1.0 }).unwrap_err();
        assert!(matches!(err, ProductError::Query(_)));
    }

    #[test]
    fn test_filter_defaults_and_blank_values() {
        let filter = ProductFilter::try_from(ProductQuery {
            category: Some(String::new()),
            q: Some(String::new()),
            limit: None,
        })
        .unwrap();

        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_filter_rejects_out_of_range_limit() {
        for limit in [0, -5, MAX_LIMIT + 1] {
            let query = ProductQuery {
                limit: Some(limit),
                ..Default::default()
            };
            assert!(matches!(
                ProductFilter::try_from(query),
                Err(ProductError::Validation(_))
            ));
        }
    }
}
