//! CRM Module
//!
//! Customer, product and order management: the in-memory store, the
//! list-endpoint filters and the write mutations.

pub mod filters;
pub mod mutations;
pub mod store;

// Re-export public types
pub use filters::{CustomerFilter, OrderFilter, ProductFilter};
pub use store::CrmStore;

// == Public Constants ==
/// Stock level below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Amount added to a low-stock product's stock per restock pass.
pub const RESTOCK_INCREMENT: u32 = 10;
