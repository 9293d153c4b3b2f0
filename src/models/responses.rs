//! Response DTOs for the CRM and property listing API
//!
//! Defines the structure of outgoing HTTP response bodies. Mutation
//! endpoints answer in-band: validation failures come back as a normal
//! response with `ok: false` and a human-readable message, matching
//! what API clients display verbatim.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::{Customer, Order, Product};

// == Record List ==
/// Response body for the plain CRM list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RecordList<T> {
    /// Number of records after filtering
    pub count: usize,
    /// The filtered, ordered records
    pub data: Vec<T>,
}

impl<T> RecordList<T> {
    /// Creates a list response from the filtered records.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

// == Customer Mutations ==
/// Response body for POST /customers.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerMutationResponse {
    pub ok: bool,
    pub message: String,
    pub customer: Option<Customer>,
}

impl CustomerMutationResponse {
    /// Builds the success response for a stored customer.
    pub fn created(customer: Customer) -> Self {
        Self {
            ok: true,
            message: "Customer created successfully".to_string(),
            customer: Some(customer),
        }
    }

    /// Builds the rejection response carrying a validation message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            customer: None,
        }
    }
}

/// Response body for POST /customers/bulk.
///
/// Bulk creation is partial: valid rows are stored and returned in
/// `customers`, invalid rows produce one entry each in `errors`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkCustomersResponse {
    pub customers: Vec<Customer>,
    pub errors: Vec<String>,
}

// == Product Mutations ==
/// Response body for POST /products.
#[derive(Debug, Clone, Serialize)]
pub struct ProductMutationResponse {
    pub ok: bool,
    pub message: String,
    pub product: Option<Product>,
}

impl ProductMutationResponse {
    /// Builds the success response for a stored product.
    pub fn created(product: Product) -> Self {
        Self {
            ok: true,
            message: "Product created successfully".to_string(),
            product: Some(product),
        }
    }

    /// Builds the rejection response carrying a validation message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            product: None,
        }
    }
}

// == Order Mutations ==
/// Response body for POST /orders.
#[derive(Debug, Clone, Serialize)]
pub struct OrderMutationResponse {
    pub ok: bool,
    pub message: String,
    pub order: Option<Order>,
}

impl OrderMutationResponse {
    /// Builds the success response for a stored order.
    pub fn created(order: Order) -> Self {
        Self {
            ok: true,
            message: "Order created successfully".to_string(),
            order: Some(order),
        }
    }

    /// Builds the rejection response carrying a validation message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            order: None,
        }
    }
}

// == Restock ==
/// One product touched by a restock pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestockedProduct {
    pub name: String,
    pub stock: u32,
}

/// Response body for POST /products/restock.
#[derive(Debug, Clone, Serialize)]
pub struct RestockResponse {
    pub updated_products: Vec<RestockedProduct>,
    pub message: String,
}

impl RestockResponse {
    /// Wraps the restocked products with the standard message.
    pub fn new(updated_products: Vec<RestockedProduct>) -> Self {
        Self {
            updated_products,
            message: "Low stock products updated successfully".to_string(),
        }
    }
}

// == Cache Metrics ==
/// Response body for GET /cache/metrics.
#[derive(Debug, Clone, Serialize)]
pub struct CacheMetricsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit ratio rounded to four decimal places
    pub hit_ratio: f64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheMetricsResponse {
    /// Creates a metrics response from cache statistics.
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            hit_ratio: (stats.hit_ratio() * 10_000.0).round() / 10_000.0,
            entries: stats.total_entries,
        }
    }
}

// == Health ==
/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
