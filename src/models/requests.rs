//! Request DTOs for the CRM and property listing API
//!
//! Defines the structure of incoming HTTP request bodies and query
//! strings. List endpoints accept every filter parameter as an
//! optional raw string: values that fail to parse are dropped rather
//! than rejected, so query parsing never returns an error.

use chrono::{DateTime, Utc};
use serde::Deserialize;

// == Customer Requests ==
/// Request body for creating a customer (POST /customers), also used
/// as one row of a bulk creation request (POST /customers/bulk).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    /// Optional phone number in international or dashed form
    #[serde(default)]
    pub phone: Option<String>,
}

// == Product Requests ==
/// Request body for creating a product (POST /products).
///
/// `price` and `stock` are kept loose on purpose so that a missing or
/// invalid value produces an in-band rejection message instead of a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
}

// == Order Requests ==
/// Request body for creating an order (POST /orders).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: u64,
    #[serde(default)]
    pub product_ids: Vec<u64>,
    /// Defaults to the current time when omitted
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
}

// == Property Requests ==
/// Request body for adding a listing (POST /properties).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
}

// == Listing Query ==
/// Query parameters for the cached listing endpoint (GET /properties).
///
/// All values arrive as raw strings; parsing and clamping happen in
/// the filter and pagination layers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

// == CRM List Queries ==
/// Query parameters for GET /customers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerListParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at_gte: Option<String>,
    pub created_at_lte: Option<String>,
    /// Matches customers whose phone number starts with this pattern
    pub phone_pattern: Option<String>,
    pub order_by: Option<String>,
}

/// Query parameters for GET /products.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    pub name: Option<String>,
    pub price_gte: Option<String>,
    pub price_lte: Option<String>,
    pub stock_gte: Option<String>,
    pub stock_lte: Option<String>,
    /// When true, restricts to products below the restock threshold
    pub low_stock: Option<String>,
    pub order_by: Option<String>,
}

/// Query parameters for GET /orders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListParams {
    pub total_amount_gte: Option<String>,
    pub total_amount_lte: Option<String>,
    pub order_date_gte: Option<String>,
    pub order_date_lte: Option<String>,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub product_id: Option<String>,
    pub order_by: Option<String>,
}
