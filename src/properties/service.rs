//! Listing Service Module
//!
//! Read path for the property listing endpoint: fetch the collection
//! snapshot through the cache, then filter and paginate it. The cache
//! key covers the whole collection, so every filter combination works
//! off the same snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{QueryCache, Snapshot, ALL_PROPERTIES_KEY};
use crate::error::Result;
use crate::models::{ListingQuery, Property};
use crate::properties::filter::ListingFilter;
use crate::properties::page::{paginate, Page, PageParams};
use crate::properties::store::PropertySource;

// == Get Or Load ==
/// Returns the property snapshot, loading it from the source on a
/// cache miss and storing it with the given TTL.
///
/// The cache lock is not held across the source load, so concurrent
/// misses may each hit the store; the last one to finish overwrites
/// the entry. Mutations never touch the cache, which means a snapshot
/// can serve stale reads until its TTL runs out.
pub async fn get_or_load(
    cache: &RwLock<QueryCache>,
    source: &dyn PropertySource,
    ttl: Duration,
) -> Result<Snapshot> {
    {
        let mut cache = cache.write().await;
        if let Some(snapshot) = cache.get(ALL_PROPERTIES_KEY) {
            debug!(records = snapshot.len(), "serving properties from cache");
            return Ok(snapshot);
        }
    }

    let records = source.load_all().await?;
    let snapshot: Snapshot = Arc::new(records);
    info!(records = snapshot.len(), ttl_secs = ttl.as_secs(), "property cache refreshed");

    cache
        .write()
        .await
        .set(ALL_PROPERTIES_KEY, snapshot.clone(), ttl);
    Ok(snapshot)
}

// == Apply ==
/// Filters the snapshot with the query's predicates, then slices the
/// requested page. Parsing is lenient throughout, so this never fails.
pub fn apply(properties: &[Property], params: &ListingQuery) -> Page<Property> {
    let filter = ListingFilter::from_params(params);
    let filtered = filter.apply(properties);
    let page_params = PageParams::from_raw(params.page.as_deref(), params.per_page.as_deref());
    paginate(&filtered, page_params)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::clock::ManualClock;
    use crate::error::Error;
    use crate::models::CreatePropertyRequest;
    use crate::properties::store::MemoryProperties;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source that counts how many times the collection is loaded.
    struct CountingSource {
        inner: MemoryProperties,
        loads: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                inner: MemoryProperties::new(),
                loads: AtomicUsize::new(0),
            }
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PropertySource for CountingSource {
        async fn load_all(&self) -> Result<Vec<Property>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load_all().await
        }

        async fn insert(&self, record: CreatePropertyRequest) -> Result<Property> {
            self.inner.insert(record).await
        }
    }

    /// Source whose loads always fail.
    struct FailingSource;

    #[async_trait]
    impl PropertySource for FailingSource {
        async fn load_all(&self) -> Result<Vec<Property>> {
            Err(Error::Store("connection refused".to_string()))
        }

        async fn insert(&self, _record: CreatePropertyRequest) -> Result<Property> {
            Err(Error::Store("connection refused".to_string()))
        }
    }

    fn listing(title: &str, price: f64, location: &str) -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: title.to_string(),
            description: "test listing".to_string(),
            price,
            location: location.to_string(),
        }
    }

    async fn seeded_source(n: usize) -> CountingSource {
        let source = CountingSource::new();
        for i in 0..n {
            source
                .insert(listing(&format!("Listing {i}"), 100.0 + i as f64, "Lagos"))
                .await
                .unwrap();
        }
        source
    }

    fn cache_with_clock() -> (RwLock<QueryCache>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let cache = RwLock::new(QueryCache::new(clock.clone()));
        (cache, clock)
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let source = seeded_source(3).await;
        let (cache, _clock) = cache_with_clock();
        let ttl = Duration::from_secs(3600);

        let first = get_or_load(&cache, &source, ttl).await.unwrap();
        let second = get_or_load(&cache, &source, ttl).await.unwrap();

        assert_eq!(source.loads(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_expired_snapshot_is_reloaded() {
        let source = seeded_source(2).await;
        let (cache, clock) = cache_with_clock();
        let ttl = Duration::from_secs(3600);

        get_or_load(&cache, &source, ttl).await.unwrap();
        clock.advance_secs(3600);
        get_or_load(&cache, &source, ttl).await.unwrap();

        assert_eq!(source.loads(), 2);
    }

    #[tokio::test]
    async fn test_writes_invisible_until_expiry() {
        let source = seeded_source(2).await;
        let (cache, clock) = cache_with_clock();
        let ttl = Duration::from_secs(3600);

        let before = get_or_load(&cache, &source, ttl).await.unwrap();
        assert_eq!(before.len(), 2);

        source.insert(listing("New", 1.0, "Abuja")).await.unwrap();

        let stale = get_or_load(&cache, &source, ttl).await.unwrap();
        assert_eq!(stale.len(), 2, "snapshot stays stale within the TTL");

        clock.advance_secs(3600);
        let fresh = get_or_load(&cache, &source, ttl).await.unwrap();
        assert_eq!(fresh.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_cache_empty() {
        let (cache, _clock) = cache_with_clock();

        let result = get_or_load(&cache, &FailingSource, Duration::from_secs(60)).await;
        assert!(matches!(result, Err(Error::Store(_))));
        assert!(cache.write().await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_ttl_reloads_every_time() {
        let source = seeded_source(1).await;
        let (cache, _clock) = cache_with_clock();

        get_or_load(&cache, &source, Duration::ZERO).await.unwrap();
        get_or_load(&cache, &source, Duration::ZERO).await.unwrap();

        assert_eq!(source.loads(), 2);
    }

    #[tokio::test]
    async fn test_apply_filters_then_paginates() {
        let source = seeded_source(25).await;
        let snapshot = source.load_all().await.unwrap();

        let params = ListingQuery {
            per_page: Some("10".to_string()),
            ..Default::default()
        };
        let page = apply(&snapshot, &params);

        assert_eq!(page.count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.data.len(), 10);
        assert!(page.next);
        assert!(!page.previous);
    }

    #[tokio::test]
    async fn test_apply_filter_shrinks_page_count() {
        let source = seeded_source(25).await;
        let snapshot = source.load_all().await.unwrap();

        // Prices run 100..124, so this keeps 5 records.
        let params = ListingQuery {
            min_price: Some("120".to_string()),
            per_page: Some("2".to_string()),
            page: Some("99".to_string()),
            ..Default::default()
        };
        let page = apply(&snapshot, &params);

        assert_eq!(page.count, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3, "overshooting page clamps to last");
        assert_eq!(page.data.len(), 1);
    }
}
