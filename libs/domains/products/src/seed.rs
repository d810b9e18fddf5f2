//! Demo catalogue inserted by `POST /api/products/seed`.

use crate::models::CreateProduct;

fn sample(title: &str, price: f64, category: &str, description: &str, image: &str) -> CreateProduct {
    CreateProduct {
        title: title.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        image: Some(image.to_string()),
    }
}

/// The four sample products, in insertion order.
pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        sample(
            "Running Shoes",
            59.99,
            "Shoes",
            "Lightweight running shoes",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=800",
        ),
        sample(
            "Wireless Headphones",
            129.99,
            "Electronics",
            "Noise-cancelling over-ear",
            "https://images.unsplash.com/photo-1518446021390-81371fecb3a2?w=800",
        ),
        sample(
            "Smart Watch",
            199.00,
            "Electronics",
            "Fitness tracking and more",
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800",
        ),
        sample(
            "Backpack",
            39.95,
            "Bags",
            "Everyday carry pack",
            "https://images.unsplash.com/photo-1520975916090-3105956dac38?w=800",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_samples_are_valid() {
        let samples = sample_products();
        assert_eq!(samples.len(), 4);
        for product in &samples {
            assert!(product.validate().is_ok(), "{} is invalid", product.title);
        }
    }

    #[test]
    fn test_sample_categories() {
        let categories: Vec<_> = sample_products().into_iter().map(|p| p.category).collect();
        assert_eq!(categories, ["Shoes", "Electronics", "Electronics", "Bags"]);
    }
}
