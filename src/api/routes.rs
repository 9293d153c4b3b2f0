//! API Routes
//!
//! Configures the Axum router with all CRM and property endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    bulk_create_customers_handler, cache_metrics_handler, create_customer_handler,
    create_order_handler, create_product_handler, create_property_handler, health_handler,
    list_customers_handler, list_orders_handler, list_products_handler, list_properties_handler,
    restock_products_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /properties` - Cached, filtered, paginated listing
/// - `POST /properties` - Add a listing
/// - `GET /cache/metrics` - Cache hit/miss counters
/// - `GET /customers` / `POST /customers` - List and create customers
/// - `POST /customers/bulk` - Create customers with partial success
/// - `GET /products` / `POST /products` - List and create products
/// - `POST /products/restock` - Replenish low-stock products
/// - `GET /orders` / `POST /orders` - List and create orders
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/properties",
            get(list_properties_handler).post(create_property_handler),
        )
        .route("/cache/metrics", get(cache_metrics_handler))
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .route("/customers/bulk", post(bulk_create_customers_handler))
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/products/restock", post(restock_products_handler))
        .route(
            "/orders",
            get(list_orders_handler).post(create_order_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
