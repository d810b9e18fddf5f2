//! Generic document access over named collections.
//!
//! Domain repositories talk to a [`DocumentStore`] rather than to a typed
//! `Collection<T>`, so every record kind goes through the same two calls:
//! insert one document, or fetch documents matching a filter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, DateTime, Document},
    options::FindOptions,
    Database,
};
use tracing::instrument;

use crate::common::{DatabaseError, DatabaseResult};

/// Reserved key holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Storage operations shared by every domain.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Database name, for diagnostics
    fn name(&self) -> &str;

    /// Insert `document` into `collection` and return its new identifier.
    ///
    /// Any client-supplied `_id` is discarded; identifiers always come from
    /// the store.
    async fn create_document(&self, collection: &str, document: Document) -> DatabaseResult<String>;

    /// Fetch up to `limit` documents matching `filter`, in store order.
    ///
    /// Filter values are either exact matches or
    /// `{ "$regex": pattern, "$options": "i" }`. Returned documents keep
    /// their identifier under [`ID_FIELD`].
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> DatabaseResult<Vec<Document>>;

    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>>;

    /// Round-trip to the server
    async fn ping(&self) -> DatabaseResult<()>;
}

/// Prepare a document for insertion: drop any `_id` and stamp both timestamps.
pub fn prepare_for_insert(mut document: Document) -> Document {
    document.remove(ID_FIELD);
    let now = DateTime::now();
    document.insert(CREATED_AT_FIELD, now);
    document.insert(UPDATED_AT_FIELD, now);
    document
}

/// Render a stored identifier as the string handed to clients.
pub fn identifier_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// [`DocumentStore`] backed by a MongoDB database.
#[derive(Clone, Debug)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    #[instrument(skip(self, document))]
    async fn create_document(&self, collection: &str, document: Document) -> DatabaseResult<String> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(prepare_for_insert(document))
            .await?;

        let id = identifier_to_string(&result.inserted_id);
        tracing::debug!(%id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> DatabaseResult<Vec<Document>> {
        let mut options = FindOptions::default();
        options.limit = limit;

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .with_options(options)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(count = documents.len(), "Documents fetched");
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        Ok(self.db.list_collection_names().await?)
    }

    async fn ping(&self) -> DatabaseResult<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| match DatabaseError::from(e) {
                DatabaseError::Query(msg) => DatabaseError::Connection(msg),
                other => other,
            })
    }
}

/// Message carried by every [`UnconfiguredDocumentStore`] error.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Database not initialized: DATABASE_URL and DATABASE_NAME must be set";

/// Stand-in used when no store settings were provided.
///
/// Every operation fails with [`DatabaseError::Connection`], so data
/// endpoints answer 500 instead of the process refusing to start.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredDocumentStore;

#[async_trait]
impl DocumentStore for UnconfiguredDocumentStore {
    fn name(&self) -> &str {
        ""
    }

    async fn create_document(&self, _collection: &str, _document: Document) -> DatabaseResult<String> {
        Err(DatabaseError::Connection(NOT_CONFIGURED_MESSAGE.to_string()))
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Document,
        _limit: Option<i64>,
    ) -> DatabaseResult<Vec<Document>> {
        Err(DatabaseError::Connection(NOT_CONFIGURED_MESSAGE.to_string()))
    }

    async fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        Err(DatabaseError::Connection(NOT_CONFIGURED_MESSAGE.to_string()))
    }

    async fn ping(&self) -> DatabaseResult<()> {
        Err(DatabaseError::Connection(NOT_CONFIGURED_MESSAGE.to_string()))
    }
}
