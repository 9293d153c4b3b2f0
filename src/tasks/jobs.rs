//! Job Bodies Module
//!
//! The periodic maintenance jobs. Each body runs one pass against the
//! shared state and returns the log lines describing what it did; the
//! runner handles scheduling, log writing and failure containment.

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};

use crate::api::AppState;
use crate::crm::mutations;

/// How far back the order reminder pass looks.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

// == Heartbeat ==
/// Reports that the service is alive.
pub async fn heartbeat(_state: AppState) -> Result<Vec<String>> {
    Ok(vec!["CRM is alive".to_string()])
}

// == Low Stock Restock ==
/// Runs a replenish pass and reports each product it raised.
pub async fn restock_low_stock(state: AppState) -> Result<Vec<String>> {
    let outcome = mutations::replenish_low_stock(&state.crm);
    Ok(outcome
        .updated_products
        .into_iter()
        .map(|p| format!("Product: {}, New Stock: {}", p.name, p.stock))
        .collect())
}

// == Order Reminders ==
/// Reports every order placed within the reminder window, together
/// with the customer email a reminder would go to.
pub async fn order_reminders(state: AppState) -> Result<Vec<String>> {
    let now = Utc::now();
    let window_start = now - ChronoDuration::days(REMINDER_WINDOW_DAYS);

    let customers = state.crm.customers();
    let mut lines = Vec::new();
    for order in state.crm.orders() {
        if order.order_date < window_start || order.order_date > now {
            continue;
        }
        if let Some(customer) = customers.iter().find(|c| c.id == order.customer_id) {
            lines.push(format!(
                "Order ID: {}, Customer Email: {}",
                order.id, customer.email
            ));
        }
    }
    Ok(lines)
}

// == CRM Report ==
/// Summarizes the CRM: customer count, order count and total revenue.
pub async fn crm_report(state: AppState) -> Result<Vec<String>> {
    let total_customers = state.crm.customers().len();
    let orders = state.crm.orders();
    let total_orders = orders.len();
    let total_revenue: f64 = orders.iter().map(|o| o.total_amount).sum();

    Ok(vec![format!(
        "Report: {total_customers} customers, {total_orders} orders, {total_revenue} revenue"
    )])
}
