//! CRM Filters Module
//!
//! Predicate filtering and ordering for the CRM list endpoints. Every
//! filter value arrives as a raw query string: values that fail to
//! parse are dropped, so a bad parameter widens the result instead of
//! failing the request. Text matching is case-insensitive substring
//! matching unless noted otherwise.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::crm::LOW_STOCK_THRESHOLD;
use crate::models::{
    Customer, CustomerListParams, Order, OrderListParams, Product, ProductListParams,
};

// == Parsing Helpers ==
/// Normalizes a raw query value: empty and whitespace-only strings are
/// treated as absent.
fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_f64(raw: &Option<String>) -> Option<f64> {
    present(raw).and_then(|s| s.parse().ok())
}

fn parse_u32(raw: &Option<String>) -> Option<u32> {
    present(raw).and_then(|s| s.parse().ok())
}

fn parse_u64(raw: &Option<String>) -> Option<u64> {
    present(raw).and_then(|s| s.parse().ok())
}

fn parse_bool(raw: &Option<String>) -> Option<bool> {
    match present(raw)?.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Parses an RFC 3339 timestamp, falling back to a naive
/// `YYYY-MM-DDTHH:MM:SS` value interpreted as UTC.
fn parse_datetime(raw: &Option<String>) -> Option<DateTime<Utc>> {
    let s = present(raw)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn split_order(order_by: &str) -> (&str, bool) {
    match order_by.strip_prefix('-') {
        Some(field) => (field, true),
        None => (order_by, false),
    }
}

// == Customer Filter ==
/// Parsed filter set for GET /customers.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at_gte: Option<DateTime<Utc>>,
    pub created_at_lte: Option<DateTime<Utc>>,
    pub phone_pattern: Option<String>,
}

impl CustomerFilter {
    /// Builds the filter from raw query parameters, dropping values
    /// that fail to parse.
    pub fn from_params(params: &CustomerListParams) -> Self {
        Self {
            name: present(&params.name).map(str::to_string),
            email: present(&params.email).map(str::to_string),
            created_at_gte: parse_datetime(&params.created_at_gte),
            created_at_lte: parse_datetime(&params.created_at_lte),
            phone_pattern: present(&params.phone_pattern).map(str::to_string),
        }
    }

    /// Checks a single customer against every active predicate.
    pub fn matches(&self, customer: &Customer) -> bool {
        if let Some(name) = &self.name {
            if !contains_ci(&customer.name, name) {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if !contains_ci(&customer.email, email) {
                return false;
            }
        }
        if let Some(gte) = self.created_at_gte {
            if customer.created_at < gte {
                return false;
            }
        }
        if let Some(lte) = self.created_at_lte {
            if customer.created_at > lte {
                return false;
            }
        }
        if let Some(pattern) = &self.phone_pattern {
            if !customer.phone.starts_with(pattern.as_str()) {
                return false;
            }
        }
        true
    }

    /// Returns the customers that satisfy every active predicate.
    pub fn apply(&self, customers: &[Customer]) -> Vec<Customer> {
        customers
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

/// Sorts customers in place by an `order_by` field name. A leading `-`
/// means descending; unknown fields leave the order untouched.
pub fn sort_customers(customers: &mut [Customer], order_by: &str) {
    let (field, desc) = split_order(order_by);
    match field {
        "id" => customers.sort_by_key(|c| c.id),
        "name" => customers.sort_by(|a, b| a.name.cmp(&b.name)),
        "email" => customers.sort_by(|a, b| a.email.cmp(&b.email)),
        "created_at" => customers.sort_by_key(|c| c.created_at),
        _ => return,
    }
    if desc {
        customers.reverse();
    }
}

// == Product Filter ==
/// Parsed filter set for GET /products.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub price_gte: Option<f64>,
    pub price_lte: Option<f64>,
    pub stock_gte: Option<u32>,
    pub stock_lte: Option<u32>,
    pub low_stock: Option<bool>,
}

impl ProductFilter {
    /// Builds the filter from raw query parameters, dropping values
    /// that fail to parse.
    pub fn from_params(params: &ProductListParams) -> Self {
        Self {
            name: present(&params.name).map(str::to_string),
            price_gte: parse_f64(&params.price_gte),
            price_lte: parse_f64(&params.price_lte),
            stock_gte: parse_u32(&params.stock_gte),
            stock_lte: parse_u32(&params.stock_lte),
            low_stock: parse_bool(&params.low_stock),
        }
    }

    /// Checks a single product against every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !contains_ci(&product.name, name) {
                return false;
            }
        }
        if let Some(gte) = self.price_gte {
            if product.price < gte {
                return false;
            }
        }
        if let Some(lte) = self.price_lte {
            if product.price > lte {
                return false;
            }
        }
        if let Some(gte) = self.stock_gte {
            if product.stock < gte {
                return false;
            }
        }
        if let Some(lte) = self.stock_lte {
            if product.stock > lte {
                return false;
            }
        }
        if self.low_stock == Some(true) && product.stock >= LOW_STOCK_THRESHOLD {
            return false;
        }
        true
    }

    /// Returns the products that satisfy every active predicate.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Sorts products in place by an `order_by` field name. A leading `-`
/// means descending; unknown fields leave the order untouched.
pub fn sort_products(products: &mut [Product], order_by: &str) {
    let (field, desc) = split_order(order_by);
    match field {
        "id" => products.sort_by_key(|p| p.id),
        "name" => products.sort_by(|a, b| a.name.cmp(&b.name)),
        "price" => products.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        "stock" => products.sort_by_key(|p| p.stock),
        _ => return,
    }
    if desc {
        products.reverse();
    }
}

// == Order Filter ==
/// Parsed filter set for GET /orders. Customer and product predicates
/// match against the referenced records.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub total_amount_gte: Option<f64>,
    pub total_amount_lte: Option<f64>,
    pub order_date_gte: Option<DateTime<Utc>>,
    pub order_date_lte: Option<DateTime<Utc>>,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub product_id: Option<u64>,
}

impl OrderFilter {
    /// Builds the filter from raw query parameters, dropping values
    /// that fail to parse.
    pub fn from_params(params: &OrderListParams) -> Self {
        Self {
            total_amount_gte: parse_f64(&params.total_amount_gte),
            total_amount_lte: parse_f64(&params.total_amount_lte),
            order_date_gte: parse_datetime(&params.order_date_gte),
            order_date_lte: parse_datetime(&params.order_date_lte),
            customer_name: present(&params.customer_name).map(str::to_string),
            product_name: present(&params.product_name).map(str::to_string),
            product_id: parse_u64(&params.product_id),
        }
    }

    fn matches(
        &self,
        order: &Order,
        customers: &HashMap<u64, &Customer>,
        products: &HashMap<u64, &Product>,
    ) -> bool {
        if let Some(gte) = self.total_amount_gte {
            if order.total_amount < gte {
                return false;
            }
        }
        if let Some(lte) = self.total_amount_lte {
            if order.total_amount > lte {
                return false;
            }
        }
        if let Some(gte) = self.order_date_gte {
            if order.order_date < gte {
                return false;
            }
        }
        if let Some(lte) = self.order_date_lte {
            if order.order_date > lte {
                return false;
            }
        }
        if let Some(name) = &self.customer_name {
            let found = customers
                .get(&order.customer_id)
                .is_some_and(|c| contains_ci(&c.name, name));
            if !found {
                return false;
            }
        }
        if let Some(name) = &self.product_name {
            let found = order.product_ids.iter().any(|id| {
                products
                    .get(id)
                    .is_some_and(|p| contains_ci(&p.name, name))
            });
            if !found {
                return false;
            }
        }
        if let Some(id) = self.product_id {
            if !order.product_ids.contains(&id) {
                return false;
            }
        }
        true
    }

    /// Returns the orders that satisfy every active predicate,
    /// resolving customer and product references against the given
    /// snapshots.
    pub fn apply(
        &self,
        orders: &[Order],
        customers: &[Customer],
        products: &[Product],
    ) -> Vec<Order> {
        let customers_by_id: HashMap<u64, &Customer> =
            customers.iter().map(|c| (c.id, c)).collect();
        let products_by_id: HashMap<u64, &Product> = products.iter().map(|p| (p.id, p)).collect();

        orders
            .iter()
            .filter(|o| self.matches(o, &customers_by_id, &products_by_id))
            .cloned()
            .collect()
    }
}

/// Sorts orders in place by an `order_by` field name. A leading `-`
/// means descending; unknown fields leave the order untouched.
pub fn sort_orders(orders: &mut [Order], order_by: &str) {
    let (field, desc) = split_order(order_by);
    match field {
        "id" => orders.sort_by_key(|o| o.id),
        "order_date" => orders.sort_by_key(|o| o.order_date),
        "total_amount" => orders.sort_by(|a, b| {
            a.total_amount
                .partial_cmp(&b.total_amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        _ => return,
    }
    if desc {
        orders.reverse();
    }
}
