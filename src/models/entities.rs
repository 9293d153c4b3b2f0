//! Domain entities for the CRM and property listing stores.
//!
//! These are the records held by the in-memory stores and serialized
//! directly into API responses. Identifiers are store-assigned and
//! strictly increasing per collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Customer ==
/// A CRM customer. Emails are unique across the collection; the phone
/// number is optional and kept as an empty string when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

// == Product ==
/// A product with a positive price and a non-negative stock level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

// == Order ==
/// An order placed by a customer for one or more products. The total
/// amount is computed at creation time and never recomputed, so later
/// price changes do not affect past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer_id: u64,
    pub product_ids: Vec<u64>,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
}

// == Property ==
/// A real-estate listing served by the cached listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
}
