//! API routes module

pub mod health;
pub mod orders;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all application routes
///
/// `/`, `/test` and `/ready` sit at the root; domain routers live under `/api`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(health::router(state.clone()))
        .nest("/api/products", products::router(state))
        .nest("/api/orders", orders::router(state))
}
