//! Property Store Module
//!
//! The authoritative source of property listings behind the cache.
//! Readers go through the [`PropertySource`] trait so the listing
//! service can be exercised against stores with controlled behavior.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::models::{CreatePropertyRequest, Property};

// == Property Source Trait ==
/// Backing store for property listings.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Loads the full property collection in insertion order.
    async fn load_all(&self) -> Result<Vec<Property>>;

    /// Persists a new listing and returns it with its assigned id.
    async fn insert(&self, record: CreatePropertyRequest) -> Result<Property>;
}

// == In-Memory Store ==
/// Process-local property store.
#[derive(Debug, Default)]
pub struct MemoryProperties {
    records: RwLock<BTreeMap<u64, Property>>,
    seq: AtomicU64,
}

impl MemoryProperties {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertySource for MemoryProperties {
    async fn load_all(&self) -> Result<Vec<Property>> {
        Ok(self.records.read().unwrap().values().cloned().collect())
    }

    async fn insert(&self, record: CreatePropertyRequest) -> Result<Property> {
        let id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let property = Property {
            id,
            title: record.title,
            description: record.description,
            price: record.price,
            location: record.location,
            created_at: Utc::now(),
        };
        self.records.write().unwrap().insert(id, property.clone());
        Ok(property)
    }
}
