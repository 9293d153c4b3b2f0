//! Query Cache Module
//!
//! Cache engine for expensive listing queries. Entries map a query key
//! to a snapshot of the property collection and expire after a TTL; the
//! cache itself never reloads data, callers repopulate it on a miss.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, Snapshot};

// == Query Cache ==
/// TTL cache keyed by query name, holding collection snapshots.
#[derive(Debug)]
pub struct QueryCache {
    /// Key to cached snapshot storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Time source used for expiry checks
    clock: Arc<dyn Clock>,
}

impl QueryCache {
    // == Constructor ==
    /// Creates an empty cache that reads time from the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Get ==
    /// Retrieves a snapshot by key if present and not expired.
    ///
    /// Expired entries are removed on access and counted as misses.
    /// A miss returns `None`; the caller is responsible for loading
    /// fresh data and calling [`set`](Self::set).
    pub fn get(&mut self, key: &str) -> Option<Snapshot> {
        let now = self.clock.now_ms();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now) {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            self.stats.record_hit();
            return Some(entry.snapshot.clone());
        }

        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores a snapshot under `key` with the given TTL.
    ///
    /// If the key already exists the snapshot is overwritten and the
    /// TTL restarts from now.
    pub fn set(&mut self, key: impl Into<String>, snapshot: Snapshot, ttl: Duration) {
        let now = self.clock.now_ms();
        let entry = CacheEntry::new(snapshot, now, ttl);
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes an entry by key. Clearing an absent key is a no-op.
    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
