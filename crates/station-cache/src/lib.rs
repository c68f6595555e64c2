//! Time-bounded cache for fetched station documents.
//!
//! The decoding/resolution engine is pure and never caches; the surrounding
//! fetch layer owns staleness. This crate gives that layer an explicit
//! map-with-TTL abstraction to inject, typically keyed by station code with
//! a 10-minute TTL for both observations and forecast documents.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

/// Hit/miss counters for the cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// A map whose entries expire a fixed duration after insertion.
///
/// Lookups evict stale entries; there is no background sweeper. Re-inserting
/// a key restarts its clock.
pub struct TtlCache<K, V> {
    entries: HashMap<K, (V, Instant)>,
    ttl: Duration,
    stats: CacheStats,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Create a cache whose entries live for `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::default(),
        }
    }

    /// Insert or replace an entry, restarting its TTL.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, (value, Instant::now()));
    }

    /// Fetch a live entry. A stale entry is evicted and reported as a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let stale = match self.entries.get(key) {
            Some((_, inserted)) => inserted.elapsed() >= self.ttl,
            None => {
                self.stats.misses += 1;
                return None;
            }
        };
        if stale {
            trace!("evicting stale cache entry");
            self.entries.remove(key);
            self.stats.evictions += 1;
            self.stats.misses += 1;
            return None;
        }
        self.stats.hits += 1;
        self.entries.get(key).map(|(value, _)| value)
    }

    /// Drop an entry regardless of age.
    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
