//! API Module
//!
//! HTTP handlers and routing for the CRM backend REST API.
//!
//! # Endpoints
//! - `GET /properties` - Cached, filtered, paginated listing
//! - `POST /properties` - Add a listing
//! - `GET /cache/metrics` - Cache hit/miss counters
//! - `GET /customers` / `POST /customers` / `POST /customers/bulk`
//! - `GET /products` / `POST /products` / `POST /products/restock`
//! - `GET /orders` / `POST /orders`
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
