//! Root, diagnostics and readiness endpoints

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Collections listed by `/test` at most.
const MAX_LISTED_COLLECTIONS: usize = 10;
/// Store errors are cut to this many characters in `/test`.
const ERROR_PREVIEW_CHARS: usize = 50;

const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";
const NOT_INITIALIZED: &str = "⚠️  Available but not initialized";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "E-Commerce Backend Running")]
    pub message: String,
}

/// Connectivity report returned by `GET /test`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Diagnostics {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    #[schema(example = "✅ Set")]
    pub database_url: String,
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_or_not(present: bool) -> String {
    let marker = if present { SET } else { NOT_SET };
    marker.to_string()
}

fn preview(error: &str) -> String {
    error.chars().take(ERROR_PREVIEW_CHARS).collect()
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Diagnostics",
    responses((status = 200, description = "Backend is running", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "E-Commerce Backend Running".to_string(),
    })
}

/// Report store connectivity and list up to ten collections.
///
/// Always answers 200; store failures and a missing database are folded
/// into the `database` and `connection_status` fields.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses((status = 200, description = "Connectivity report", body = Diagnostics))
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<Diagnostics> {
    let (database, connection_status, collections) = match &state.store {
        None => (NOT_INITIALIZED.to_string(), NOT_CONNECTED, Vec::new()),
        Some(store) => match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                ("✅ Connected & Working".to_string(), CONNECTED, names)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diagnostics could not list collections");
                (
                    format!("⚠️  Connected but Error: {}", preview(&e.to_string())),
                    CONNECTED,
                    Vec::new(),
                )
            }
        },
    };

    let env = state.config.database_env;
    Json(Diagnostics {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_or_not(env.url_set),
        database_name: set_or_not(env.name_set),
        connection_status: connection_status.to_string(),
        collections,
    })
}

/// Readiness: 503 until the store answers a ping
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.document_store();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async move {
            let status = check_health_detailed(store.as_ref()).await;
            tracing::debug!(response_time_ms = status.response_time_ms, "Store ping");
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_default())
            }
        }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
        .route("/ready", get(ready))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DatabaseEnv, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{AppInfo, server::ServerConfig};
    use database::mongodb::bson::doc;
    use database::mongodb::{DocumentStore, MongoConfig};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use test_utils::{MemoryDocumentStore, UnreachableDocumentStore};
    use tower::ServiceExt;

    const ALL_SET: DatabaseEnv = DatabaseEnv {
        url_set: true,
        name_set: true,
    };

    fn state_with(store: Option<Arc<dyn DocumentStore>>, database_env: DatabaseEnv) -> AppState {
        AppState {
            config: Arc::new(Config {
                app: AppInfo {
                    name: "shop_api",
                    version: "0.0.0",
                },
                mongodb: store
                    .as_ref()
                    .map(|_| MongoConfig::with_database("mongodb://x", "shop")),
                database_env,
                server: ServerConfig::new("127.0.0.1".to_string(), 0),
                environment: Environment::Development,
            }),
            store,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_message() {
        let state = state_with(Some(Arc::new(MemoryDocumentStore::new())), ALL_SET);
        let (status, body): (_, RootResponse) = get_json(router(state), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "E-Commerce Backend Running");
    }

    #[tokio::test]
    async fn test_diagnostics_lists_at_most_ten_collections() {
        let store = Arc::new(MemoryDocumentStore::new());
        for i in 0..12 {
            store
                .create_document(&format!("c{:02}", i), doc! { "n": i })
                .await
                .unwrap();
        }

        let state = state_with(Some(store), ALL_SET);
        let (status, body): (_, Diagnostics) = get_json(router(state), "/test").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.backend, "✅ Running");
        assert_eq!(body.database, "✅ Connected & Working");
        assert_eq!(body.database_url, "✅ Set");
        assert_eq!(body.database_name, "✅ Set");
        assert_eq!(body.connection_status, "Connected");
        assert_eq!(body.collections.len(), 10);
    }

    #[tokio::test]
    async fn test_diagnostics_reports_store_error_without_failing() {
        let env = DatabaseEnv {
            url_set: true,
            name_set: false,
        };
        let state = state_with(Some(Arc::new(UnreachableDocumentStore::new())), env);
        let (status, body): (_, Diagnostics) = get_json(router(state), "/test").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.database.starts_with("⚠️  Connected but Error: "));
        let detail = body.database.trim_start_matches("⚠️  Connected but Error: ");
        assert_eq!(detail.chars().count(), ERROR_PREVIEW_CHARS);
        assert_eq!(body.database_url, "✅ Set");
        assert_eq!(body.database_name, "❌ Not Set");
        assert_eq!(body.connection_status, "Connected");
        assert!(body.collections.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostics_without_database() {
        let state = state_with(None, DatabaseEnv::default());
        let (status, body): (_, Diagnostics) = get_json(router(state), "/test").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.backend, "✅ Running");
        assert_eq!(body.database, "⚠️  Available but not initialized");
        assert_eq!(body.connection_status, "Not Connected");
        assert_eq!(body.database_url, "❌ Not Set");
        assert_eq!(body.database_name, "❌ Not Set");
        assert!(body.collections.is_empty());
    }

    #[tokio::test]
    async fn test_ready_reflects_store_reachability() {
        let up = state_with(Some(Arc::new(MemoryDocumentStore::new())), ALL_SET);
        let (status, body): (_, serde_json::Value) = get_json(router(up), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "connected");

        let down = state_with(Some(Arc::new(UnreachableDocumentStore::new())), ALL_SET);
        let (status, body): (_, serde_json::Value) = get_json(router(down), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");

        let missing = state_with(None, DatabaseEnv::default());
        let (status, _): (_, serde_json::Value) = get_json(router(missing), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let long = "é".repeat(60);
        assert_eq!(preview(&long).chars().count(), 50);
        assert_eq!(preview("short"), "short");
    }
}
