//! In-process [`DocumentStore`] doubles.
//!
//! `MemoryDocumentStore` stores documents in a map keyed by collection and
//! understands the two filter shapes the domains emit (exact match and
//! `{ "$regex": .., "$options": "i" }`). `UnreachableDocumentStore` fails
//! every call the way a store that cannot be reached does.

use async_trait::async_trait;
use database::mongodb::bson::{Bson, Document, oid::ObjectId};
use database::mongodb::{DocumentStore, ID_FIELD, prepare_for_insert};
use database::{DatabaseError, DatabaseResult};
use regex::RegexBuilder;
use std::collections::HashMap;
use std::sync::RwLock;

pub struct MemoryDocumentStore {
    name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_name("shop-test")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Every document in `collection`, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .map(|c| c.get(collection).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.documents(collection).len()
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> DatabaseError {
    DatabaseError::Query("memory store lock poisoned".to_string())
}

fn matches(document: &Document, filter: &Document) -> DatabaseResult<bool> {
    for (key, expected) in filter {
        let actual = document.get(key);

        let matched = match expected {
            Bson::Document(op) if op.contains_key("$regex") => {
                let pattern = op
                    .get_str("$regex")
                    .map_err(|e| DatabaseError::Query(e.to_string()))?;
                let case_insensitive = op
                    .get_str("$options")
                    .map(|o| o.contains('i'))
                    .unwrap_or(false);
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(case_insensitive)
                    .build()
                    .map_err(|e| DatabaseError::Query(e.to_string()))?;

                matches!(actual, Some(Bson::String(s)) if regex.is_match(s))
            }
            value => actual == Some(value),
        };

        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, collection: &str, document: Document) -> DatabaseResult<String> {
        let id = ObjectId::new();
        let mut stored = prepare_for_insert(document);
        stored.insert(ID_FIELD, id);

        self.collections
            .write()
            .map_err(poisoned)?
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> DatabaseResult<Vec<Document>> {
        let collections = self.collections.read().map_err(poisoned)?;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // Mongo treats a limit of 0 as "no limit".
        let take = match limit {
            Some(n) if n > 0 => n as usize,
            _ => usize::MAX,
        };

        let mut found = Vec::new();
        for document in documents {
            if found.len() >= take {
                break;
            }
            if matches(document, &filter)? {
                found.push(document.clone());
            }
        }
        Ok(found)
    }

    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        let collections = self.collections.read().map_err(poisoned)?;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> DatabaseResult<()> {
        Ok(())
    }
}

/// Message carried by every [`UnreachableDocumentStore`] error.
pub const UNREACHABLE_MESSAGE: &str =
    "Server selection timeout: No available servers. Topology: { Type: Unknown }";

/// A store whose server is never reachable.
pub struct UnreachableDocumentStore {
    name: String,
}

impl UnreachableDocumentStore {
    pub fn new() -> Self {
        Self {
            name: "shop-test".to_string(),
        }
    }

    fn error() -> DatabaseError {
        DatabaseError::Connection(UNREACHABLE_MESSAGE.to_string())
    }
}

impl Default for UnreachableDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for UnreachableDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, _collection: &str, _document: Document) -> DatabaseResult<String> {
        Err(Self::error())
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Document,
        _limit: Option<i64>,
    ) -> DatabaseResult<Vec<Document>> {
        Err(Self::error())
    }

    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        Err(Self::error())
    }

    async fn ping(&self) -> DatabaseResult<()> {
        Err(Self::error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::bson::doc;
    use database::mongodb::{CREATED_AT_FIELD, UPDATED_AT_FIELD};

    #[tokio::test]
    async fn test_create_assigns_object_id_and_timestamps() {
        let store = MemoryDocumentStore::new();
        let id = store
            .create_document("product", doc! { "_id": "mine", "title": "Backpack" })
            .await
            .unwrap();

        assert_eq!(id.len(), 24);
        let stored = &store.documents("product")[0];
        assert_eq!(stored.get_object_id(ID_FIELD).unwrap().to_hex(), id);
        assert!(stored.get_datetime(CREATED_AT_FIELD).is_ok());
        assert!(stored.get_datetime(UPDATED_AT_FIELD).is_ok());
    }

    #[tokio::test]
    async fn test_get_documents_filters_and_limits() {
        let store = MemoryDocumentStore::new();
        for (title, category) in [
            ("Running Shoes", "Shoes"),
            ("Wireless Headphones", "Electronics"),
            ("Smart Watch", "Electronics"),
        ] {
            store
                .create_document("product", doc! { "title": title, "category": category })
                .await
                .unwrap();
        }

        let electronics = store
            .get_documents("product", doc! { "category": "Electronics" }, None)
            .await
            .unwrap();
        assert_eq!(electronics.len(), 2);

        let watch = store
            .get_documents(
                "product",
                doc! { "title": { "$regex": "WATCH", "$options": "i" } },
                None,
            )
            .await
            .unwrap();
        assert_eq!(watch.len(), 1);

        let limited = store.get_documents("product", doc! {}, Some(1)).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].get_str("title").unwrap(), "Running Shoes");
    }

    #[tokio::test]
    async fn test_missing_collection_is_empty() {
        let store = MemoryDocumentStore::new();
        let docs = store.get_documents("order", doc! {}, Some(50)).await.unwrap();
        assert!(docs.is_empty());
        assert!(store.list_collection_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_with_connection_errors() {
        let store = UnreachableDocumentStore::new();

        assert!(store.ping().await.unwrap_err().is_connection());
        assert!(
            store
                .create_document("order", doc! {})
                .await
                .unwrap_err()
                .is_connection()
        );
    }
}
