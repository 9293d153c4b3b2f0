//! CRM Store Module
//!
//! In-memory store for customers, products and orders. Each collection
//! lives behind its own lock and hands out owned snapshots, so readers
//! never observe a record mid-update. Identifiers are assigned from
//! per-collection sequences starting at 1.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::models::{Customer, Order, Product};

// == CRM Store ==
/// Shared in-memory CRM state.
#[derive(Debug, Default)]
pub struct CrmStore {
    customers: RwLock<BTreeMap<u64, Customer>>,
    products: RwLock<BTreeMap<u64, Product>>,
    orders: RwLock<BTreeMap<u64, Order>>,
    customer_seq: AtomicU64,
    product_seq: AtomicU64,
    order_seq: AtomicU64,
}

impl CrmStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Customers ==
    /// Stores a new customer and returns it with its assigned id.
    pub fn add_customer(&self, name: String, email: String, phone: String) -> Customer {
        let id = self.customer_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let customer = Customer {
            id,
            name,
            email,
            phone,
            created_at: Utc::now(),
        };
        self.customers
            .write()
            .unwrap()
            .insert(id, customer.clone());
        customer
    }

    /// Checks whether any stored customer already uses this email.
    /// Comparison is case-insensitive.
    pub fn email_taken(&self, email: &str) -> bool {
        let needle = email.to_lowercase();
        self.customers
            .read()
            .unwrap()
            .values()
            .any(|c| c.email.to_lowercase() == needle)
    }

    /// Returns a customer by id.
    pub fn customer(&self, id: u64) -> Option<Customer> {
        self.customers.read().unwrap().get(&id).cloned()
    }

    /// Returns all customers in insertion order.
    pub fn customers(&self) -> Vec<Customer> {
        self.customers.read().unwrap().values().cloned().collect()
    }

    // == Products ==
    /// Stores a new product and returns it with its assigned id.
    pub fn add_product(&self, name: String, price: f64, stock: u32) -> Product {
        let id = self.product_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id,
            name,
            price,
            stock,
        };
        self.products.write().unwrap().insert(id, product.clone());
        product
    }

    /// Returns a product by id.
    pub fn product(&self, id: u64) -> Option<Product> {
        self.products.read().unwrap().get(&id).cloned()
    }

    /// Returns all products in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.products.read().unwrap().values().cloned().collect()
    }

    /// Returns the products whose stock is strictly below `threshold`.
    pub fn products_below(&self, threshold: u32) -> Vec<Product> {
        self.products
            .read()
            .unwrap()
            .values()
            .filter(|p| p.stock < threshold)
            .cloned()
            .collect()
    }

    /// Overwrites a product's stock level and returns the updated
    /// record, or `None` if the product does not exist. Last write
    /// wins; there is no compare-and-swap.
    pub fn set_product_stock(&self, id: u64, stock: u32) -> Option<Product> {
        let mut products = self.products.write().unwrap();
        let product = products.get_mut(&id)?;
        product.stock = stock;
        Some(product.clone())
    }

    // == Orders ==
    /// Stores a new order and returns it with its assigned id.
    pub fn add_order(
        &self,
        customer_id: u64,
        product_ids: Vec<u64>,
        order_date: DateTime<Utc>,
        total_amount: f64,
    ) -> Order {
        let id = self.order_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let order = Order {
            id,
            customer_id,
            product_ids,
            order_date,
            total_amount,
        };
        self.orders.write().unwrap().insert(id, order.clone());
        order
    }

    /// Returns all orders in insertion order.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().unwrap().values().cloned().collect()
    }
}
