//! Properties Module
//!
//! The property listing side of the service: the backing store, the
//! lenient filter, the pagination engine and the cached read path.

pub mod filter;
pub mod page;
pub mod service;
pub mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use filter::ListingFilter;
pub use page::{Page, PageParams, DEFAULT_PER_PAGE, MAX_PER_PAGE, MIN_PER_PAGE};
pub use store::{MemoryProperties, PropertySource};
