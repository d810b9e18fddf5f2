use database::mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{OrderError, OrderResult};

/// Order lifecycle state
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting payment
    #[default]
    Pending,
    Paid,
    Shipped,
    Cancelled,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    /// Identifier of the ordered product (not checked against the catalogue)
    #[validate(length(min = 1))]
    #[schema(example = "65f0c1a2b3c4d5e6f7a8b9c0")]
    pub product_id: String,
    /// Product title at the time of ordering
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Unit price at the time of ordering
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

/// DTO for creating an order
///
/// Unknown fields (including any client-chosen `_id` or `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Ada Lovelace")]
    pub customer_name: String,
    #[validate(email)]
    #[schema(example = "ada@example.com")]
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[validate(length(min = 1, message = "an order needs at least one item"), nested)]
    pub items: Vec<OrderItem>,
    #[validate(range(min = 0.0, message = "total must not be negative"))]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
}

impl CreateOrder {
    pub fn to_document(&self) -> OrderResult<Document> {
        bson::to_document(self)
            .map_err(|e| OrderError::Query(format!("Failed to encode order: {}", e)))
    }
}

/// Response body for a created order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderCreated {
    #[schema(example = "65f0c1a2b3c4d5e6f7a8b9c1")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn order() -> CreateOrder {
        CreateOrder {
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            shipping_address: Some("12 Analytical Row".to_string()),
            items: vec![OrderItem {
                product_id: "65f0c1a2b3c4d5e6f7a8b9c0".to_string(),
                title: "Smart Watch".to_string(),
                price: 199.0,
                quantity: 1,
            }],
            total: 199.0,
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_valid_order() {
        assert!(order().validate().is_ok());
    }

    #[test]
    fn test_order_requires_items() {
        let mut empty = order();
        empty.items.clear();
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("items"));
    }

    #[test]
    fn test_item_rules_are_checked() {
        let mut zero_qty = order();
        zero_qty.items[0].quantity = 0;
        assert!(zero_qty.validate().is_err());

        let mut bad_email = order();
        bad_email.customer_email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let parsed: CreateOrder = serde_json::from_value(serde_json::json!({
            "customer_name": "Ada",
            "customer_email": "ada@example.com",
            "items": [{"product_id": "p1", "title": "Backpack", "price": 39.95, "quantity": 2}],
            "total": 79.9
        }))
        .unwrap();

        assert_eq!(parsed.status, OrderStatus::Pending);
        assert_eq!(parsed.shipping_address, None);
    }

    #[test]
    fn test_status_string_forms() {
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(OrderStatus::from_str("shipped").unwrap(), OrderStatus::Shipped);

        let document = order().to_document().unwrap();
        assert_eq!(document.get_str("status").unwrap(), "pending");
    }
}
