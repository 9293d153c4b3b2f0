//! Cache Module
//!
//! In-memory TTL cache for expensive listing queries, following the
//! cache-aside pattern: readers consult the cache, load from the
//! property store on a miss, and write the result back.

pub mod clock;
mod entry;
mod stats;
mod store;

// Re-export public types
pub use clock::{Clock, SystemClock};
pub use entry::{CacheEntry, Snapshot};
pub use stats::CacheStats;
pub use store::QueryCache;

// == Public Constants ==
/// Cache key under which the full property collection is stored.
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// Default snapshot TTL in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
