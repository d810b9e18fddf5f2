//! Shared test utilities for domain testing
//!
//! - `MemoryDocumentStore`: in-process document store (always available)
//! - `UnreachableDocumentStore`: store that fails every call with a connection error
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use database::mongodb::DocumentStore;
//! use test_utils::{MemoryDocumentStore, TestDataBuilder};
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let title = builder.name("product", "main");
//! ```
//!
//! ## MongoDB containers
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo"] }
//! ```

mod store;

#[cfg(feature = "mongo")]
mod mongo;

pub use store::{MemoryDocumentStore, UNREACHABLE_MESSAGE, UnreachableDocumentStore};

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique name, e.g. `test-product-12345-main`.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Unique address in the reserved `example.com` domain.
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.com", local, self.seed)
    }

    /// Price in `[1.00, 1000.00)` with two decimals.
    pub fn price(&self) -> f64 {
        (100 + self.seed % 99_900) as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that `id` looks like a store-assigned ObjectId (24 hex chars).
    pub fn assert_object_id(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()),
            "{}: expected a 24-char hex ObjectId, got {:?}",
            context,
            id
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
