//! Orders API routes

use axum::Router;
use domain_orders::{OrderService, StoreOrderRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = StoreOrderRepository::new(state.document_store());
    handlers::router(OrderService::new(repository))
}
