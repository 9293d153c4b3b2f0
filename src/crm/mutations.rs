//! CRM Mutations Module
//!
//! Write operations against the CRM store. Validation failures are
//! answered in-band with `ok: false` and a message the client can show
//! verbatim; only transport-level problems become HTTP errors.

use std::collections::HashSet;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::crm::store::CrmStore;
use crate::crm::{LOW_STOCK_THRESHOLD, RESTOCK_INCREMENT};
use crate::models::{
    BulkCustomersResponse, CreateCustomerRequest, CreateOrderRequest, CreateProductRequest,
    CustomerMutationResponse, OrderMutationResponse, ProductMutationResponse, RestockResponse,
    RestockedProduct,
};

// Accepted phone shapes: +1234567890, 123-456-7890 or 1234567890
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+\d{7,15}|\d{3}-\d{3}-\d{4}|\d{7,15})$").expect("valid regex"));

// == Create Customer ==
/// Validates and stores a single customer.
///
/// The email must be unused (case-insensitively) and the phone, when
/// given, must match one of the accepted shapes. An empty phone string
/// counts as absent.
pub fn create_customer(store: &CrmStore, input: CreateCustomerRequest) -> CustomerMutationResponse {
    if store.email_taken(&input.email) {
        return CustomerMutationResponse::rejected("Email already exists");
    }
    let phone = input.phone.unwrap_or_default();
    if !phone.is_empty() && !PHONE_REGEX.is_match(&phone) {
        return CustomerMutationResponse::rejected("Invalid phone format");
    }
    let customer = store.add_customer(input.name, input.email, phone);
    CustomerMutationResponse::created(customer)
}

// == Bulk Create Customers ==
/// Validates and stores a batch of customers with partial success:
/// valid rows are stored, invalid rows produce a `Row {idx}: ...`
/// error each. Rows are processed in order, so a duplicate email later
/// in the batch is rejected against earlier rows.
pub fn bulk_create_customers(
    store: &CrmStore,
    rows: Vec<CreateCustomerRequest>,
) -> BulkCustomersResponse {
    let mut response = BulkCustomersResponse::default();

    for (idx, row) in rows.into_iter().enumerate() {
        if row.name.is_empty() || row.email.is_empty() {
            response
                .errors
                .push(format!("Row {idx}: name and email are required"));
            continue;
        }
        if store.email_taken(&row.email) {
            response.errors.push(format!("Row {idx}: Email already exists"));
            continue;
        }
        let phone = row.phone.unwrap_or_default();
        if !phone.is_empty() && !PHONE_REGEX.is_match(&phone) {
            response.errors.push(format!("Row {idx}: Invalid phone format"));
            continue;
        }
        response
            .customers
            .push(store.add_customer(row.name, row.email, phone));
    }

    response
}

// == Create Product ==
/// Validates and stores a single product. The price must be present
/// and strictly positive; the stock defaults to zero and must not be
/// negative.
pub fn create_product(store: &CrmStore, input: CreateProductRequest) -> ProductMutationResponse {
    let Some(price) = input.price else {
        return ProductMutationResponse::rejected("Price is required");
    };
    if price <= 0.0 {
        return ProductMutationResponse::rejected("Price must be a positive number");
    }
    let stock = match u32::try_from(input.stock.unwrap_or(0)) {
        Ok(stock) => stock,
        Err(_) => return ProductMutationResponse::rejected("Stock cannot be negative"),
    };
    let product = store.add_product(input.name, price, stock);
    ProductMutationResponse::created(product)
}

// == Create Order ==
/// Validates and stores an order. The customer and every product must
/// exist; repeated product ids count once. The total is the sum of the
/// product prices at creation time and is never recomputed.
pub fn create_order(store: &CrmStore, input: CreateOrderRequest) -> OrderMutationResponse {
    if store.customer(input.customer_id).is_none() {
        return OrderMutationResponse::rejected("Invalid customer ID");
    }
    if input.product_ids.is_empty() {
        return OrderMutationResponse::rejected("At least one product must be selected");
    }

    let mut seen = HashSet::new();
    let mut products = Vec::new();
    let mut invalid_ids = Vec::new();
    for id in input.product_ids {
        if !seen.insert(id) {
            continue;
        }
        match store.product(id) {
            Some(product) => products.push(product),
            None => invalid_ids.push(id.to_string()),
        }
    }
    if !invalid_ids.is_empty() {
        return OrderMutationResponse::rejected(format!(
            "Invalid product ID(s): {}",
            invalid_ids.join(", ")
        ));
    }

    let total_amount: f64 = products.iter().map(|p| p.price).sum();
    let order_date = input.order_date.unwrap_or_else(Utc::now);
    let order = store.add_order(
        input.customer_id,
        products.iter().map(|p| p.id).collect(),
        order_date,
        total_amount,
    );
    OrderMutationResponse::created(order)
}

// == Replenish Low Stock ==
/// Finds every product with stock strictly below the threshold and
/// raises it by the restock increment. Each write replaces the stock
/// level outright (last write wins); the pass is not transactional and
/// a second pass right after finds nothing to do.
pub fn replenish_low_stock(store: &CrmStore) -> RestockResponse {
    let low = store.products_below(LOW_STOCK_THRESHOLD);
    let mut updated = Vec::with_capacity(low.len());

    for product in low {
        let new_stock = product.stock + RESTOCK_INCREMENT;
        if let Some(refreshed) = store.set_product_stock(product.id, new_stock) {
            updated.push(RestockedProduct {
                name: refreshed.name,
                stock: refreshed.stock,
            });
        }
    }

    RestockResponse::new(updated)
}
