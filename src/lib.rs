//! CRM backend with a cached property listing API
//!
//! Serves customer, product and order management endpoints alongside a
//! TTL-cached real-estate listing, with periodic maintenance jobs for
//! restocking, reminders and reporting.

pub mod api;
pub mod cache;
pub mod config;
pub mod crm;
pub mod error;
pub mod models;
pub mod properties;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
