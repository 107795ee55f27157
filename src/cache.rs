//! Time-bounded result cache.
//!
//! In-memory memoization of finished analyses keyed by normalized URL.
//! Explicitly constructed and passed into the analyzer - no module-level
//! singleton. Entries expire after the configured TTL; expired entries are
//! dropped on read and swept on write. Not durable across restarts.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::CACHE_TTL;
use crate::models::AnalysisResult;

struct CacheEntry {
    result: AnalysisResult,
    stored_at: Instant,
}

/// Concurrent TTL cache of analysis results.
///
/// Reads and writes from concurrent analyses are safe; last write wins for a
/// given URL.
pub struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResultCache {
    /// Creates a cache with the default 5-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    /// Creates a cache with a custom TTL (used by tests and embedders).
    pub fn with_ttl(ttl: Duration) -> Self {
        ResultCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `key` if present and unexpired.
    ///
    /// An expired entry is removed on the spot.
    pub fn get(&self, key: &str) -> Option<AnalysisResult> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get(key) {
            if entry.stored_at.elapsed() <= self.ttl {
                return Some(entry.result.clone());
            }
            entries.remove(key);
        }
        None
    }

    /// Stores a result under `key`, sweeping expired entries while holding
    /// the lock so the map stays bounded by live traffic.
    pub fn insert(&self, key: String, result: AnalysisResult) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| entry.stored_at.elapsed() <= self.ttl);
        entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of live entries (expired entries may still be counted until the
    /// next sweep).
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
