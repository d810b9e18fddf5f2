//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health::{Diagnostics, RootResponse};

/// Combined OpenAPI documentation for Shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Minimal e-commerce backend: products, orders and store diagnostics",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::api::health::root,
        crate::api::health::diagnostics,
        crate::api::health::ready,
    ),
    components(schemas(RootResponse, Diagnostics)),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Diagnostics", description = "Liveness and store connectivity"),
        (name = "Products", description = "Product catalogue endpoints"),
        (name = "Orders", description = "Order placement")
    )
)]
pub struct ApiDoc;
