//! Bounded LRU loading cache.
//!
//! A fixed-capacity key→value map populated lazily: a miss runs the
//! installed loader exactly once for that key, a hit refreshes recency and
//! returns the already-built value, and inserting past capacity silently
//! evicts the least-recently-used entry. Values are handed out as `Arc`s so
//! evicted entries stay alive for any caller still holding one.
//!
//! # Locking
//!
//! All state sits behind one mutex per cache instance; there is no static
//! or shared state, so independent instances are fully isolated. The lock
//! is held across the loader call, which is what collapses concurrent
//! misses for one key into a single load and rules out partial entries.
//! Loaders are expected to be CPU-bound and must not call back into the
//! same cache.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use linked_hash_map::LinkedHashMap;
use log::debug;

use crate::error::{Error, Result};

/// Hit/miss/eviction counters, snapshotted by [`LoadingCache::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Fixed-capacity LRU map that computes missing values on demand.
///
/// `K` is cloned once per resident entry; values are shared via `Arc`.
/// The loader returns `Result` and a failed load leaves no trace: the next
/// `get` for that key runs the loader again.
pub struct LoadingCache<K, V, F> {
    entries: Mutex<LinkedHashMap<K, Arc<V>>>,
    capacity: usize,
    loader: F,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V, F> LoadingCache<K, V, F>
where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> Result<V>,
{
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize, loader: F) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            entries: Mutex::new(LinkedHashMap::new()),
            capacity,
            loader,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        })
    }

    /// Returns the value for `key`, loading it on first use.
    ///
    /// A hit marks the entry most-recently-used. A miss runs the loader,
    /// evicts the least-recently-used entry if the cache is full, inserts
    /// the fresh value as most-recently-used and returns it. Loader errors
    /// propagate unchanged and nothing is inserted for the failed key.
    pub fn get(&self, key: &K) -> Result<Arc<V>> {
        let mut entries = self.lock_entries();

        if let Some(value) = entries.get_refresh(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(value));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = Arc::new((self.loader)(key)?);

        if entries.len() == self.capacity && entries.pop_front().is_some() {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!("cache at capacity {}, evicted LRU entry", self.capacity);
        }
        entries.insert(key.clone(), Arc::clone(&value));

        Ok(value)
    }

    /// Current entry count, always `<= capacity`.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of resident entries in recency order, least recent first.
    /// Keys are cloned; values are shared.
    pub fn entries(&self) -> Vec<(K, Arc<V>)> {
        self.lock_entries()
            .iter()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
            .collect()
    }

    /// True if `key` is resident. Does not touch recency or the loader.
    pub fn contains_key(&self, key: &K) -> bool {
        self.lock_entries().contains_key(key)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// A panicking loader poisons the mutex but cannot leave a partial
    /// entry (insertion happens only after the loader returns), so the
    /// guard is safe to recover.
    fn lock_entries(&self) -> std::sync::MutexGuard<'_, LinkedHashMap<K, Arc<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
