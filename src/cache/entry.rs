//! Cache Entry Module
//!
//! A single cached query result with its expiry bookkeeping. Entries
//! hold a shared snapshot of the property collection so readers can
//! keep serving an entry that is later replaced.

use std::sync::Arc;
use std::time::Duration;

use crate::models::Property;

/// Immutable snapshot of the full property collection.
pub type Snapshot = Arc<Vec<Property>>;

// == Cache Entry ==
/// A cached snapshot together with its creation and expiry instants,
/// both in Unix milliseconds.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached collection snapshot.
    pub snapshot: Snapshot,
    /// Creation timestamp (Unix milliseconds).
    pub created_at: u64,
    /// Timestamp at which the entry stops being served (Unix milliseconds).
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` after `now_ms`.
    ///
    /// # Arguments
    /// * `snapshot` - The collection snapshot to cache
    /// * `now_ms` - Current time in Unix milliseconds
    /// * `ttl` - How long the entry stays fresh
    pub fn new(snapshot: Snapshot, now_ms: u64, ttl: Duration) -> Self {
        Self {
            snapshot,
            created_at: now_ms,
            expires_at: now_ms + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a zero TTL
    /// produces an entry that is never served.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot_of(n: usize) -> Snapshot {
        let records = (0..n)
            .map(|i| Property {
                id: i as u64 + 1,
                title: format!("Listing {}", i + 1),
                description: "test record".to_string(),
                price: 100.0,
                location: "Lagos".to_string(),
                created_at: Utc::now(),
            })
            .collect();
        Arc::new(records)
    }

    #[test]
    fn test_entry_not_expired_before_ttl() {
        let entry = CacheEntry::new(snapshot_of(1), 1_000, Duration::from_secs(60));

        assert!(!entry.is_expired(1_000));
        assert!(!entry.is_expired(60_999));
    }

    #[test]
    fn test_entry_expired_at_exact_boundary() {
        let entry = CacheEntry::new(snapshot_of(1), 1_000, Duration::from_secs(60));

        assert!(entry.is_expired(61_000));
        assert!(entry.is_expired(61_001));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new(snapshot_of(1), 1_000, Duration::ZERO);

        assert!(entry.is_expired(1_000));
    }

    #[test]
    fn test_entry_records_creation_and_expiry() {
        let entry = CacheEntry::new(snapshot_of(3), 42_000, Duration::from_secs(10));

        assert_eq!(entry.created_at, 42_000);
        assert_eq!(entry.expires_at, 52_000);
        assert_eq!(entry.snapshot.len(), 3);
    }

    #[test]
    fn test_snapshot_is_shared_not_copied() {
        let snapshot = snapshot_of(2);
        let entry = CacheEntry::new(snapshot.clone(), 0, Duration::from_secs(1));

        assert!(Arc::ptr_eq(&snapshot, &entry.snapshot));
    }
}
