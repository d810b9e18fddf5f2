//! Products API routes

use axum::Router;
use domain_products::{ProductService, StoreProductRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = StoreProductRepository::new(state.document_store());
    handlers::router(ProductService::new(repository))
}
