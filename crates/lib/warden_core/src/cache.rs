//! In-memory response cache with optional per-entry TTL.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Cache backend errors.
///
/// `MemoryCache` cannot fail; the variant exists for backends that talk to
/// an external cache server.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),
}

/// Cache surface the admin API manages.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Drop every cached entry.
    async fn clear(&self) -> Result<(), CacheError>;
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Option<DateTime<Utc>>,
}

/// Concurrent in-memory cache keyed by string.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, optionally expiring after `ttl`.
    pub fn insert(&self, key: impl Into<String>, value: Value, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            expires_at: ttl.map(|ttl| Utc::now() + ttl),
        };
        self.entries.insert(key.into(), entry);
    }

    /// Fetch a value. Expired entries are removed and read as misses.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if let Some(expires_at) = entry.expires_at
            && expires_at <= Utc::now()
        {
            // Release the shard guard before removing.
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Number of entries, including any not yet swept expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn clear(&self) -> Result<(), CacheError> {
        let dropped = self.entries.len();
        self.entries.clear();
        info!(dropped, "cache cleared");
        Ok(())
    }
}
