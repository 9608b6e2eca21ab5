//! Cache manager for expensive lookups
//!
//! Provides a `CacheManager` that stores cloneable values keyed by string with a
//! creation timestamp, treating entries older than the TTL as stale.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Default time-to-live for cache entries (1 hour)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// A stored value together with the time it was produced
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// An entry is expired once its age exceeds the TTL. A timestamp in the
    /// future (clock moved backwards) counts as fresh.
    fn is_expired(&self, ttl: Duration) -> bool {
        Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .map_or(false, |age| age > ttl)
    }
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Slot holding at most one entry; its lock is the single-flight gate for the key
type Slot<T> = Arc<Mutex<Option<CacheEntry<T>>>>;

/// Manages cached values for the lifetime of the process
///
/// Each key owns a slot guarded by an async mutex. `get_or_populate` holds the
/// slot's lock while the producer runs, so concurrent callers for the same key
/// wait for the first population and then read its result instead of running
/// the producer again. Different keys never contend.
///
/// Cloning a `CacheManager` yields a handle to the same store.
#[derive(Debug)]
pub struct CacheManager<T> {
    slots: Arc<DashMap<String, Slot<T>>>,
    ttl: Duration,
}

impl<T> Clone for CacheManager<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            ttl: self.ttl,
        }
    }
}

impl<T> Default for CacheManager<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl<T> CacheManager<T> {
    /// Creates an empty cache whose entries go stale after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Time-to-live applied to every entry
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Removes the entry for `key`, returning whether a slot existed
    ///
    /// A population already in flight for the key completes into the detached
    /// slot and is not visible to later callers.
    pub fn evict(&self, key: &str) -> bool {
        self.slots.remove(key).is_some()
    }

    /// Removes every entry
    pub fn clear(&self) {
        self.slots.clear();
    }

    /// Number of keys currently holding a slot
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops the slot for `key` if it is still `slot` and no other caller holds it
    ///
    /// Callers waiting on the slot keep it alive; the last one to fail removes it.
    fn discard_if_unshared(&self, key: &str, slot: &Slot<T>) {
        self.slots
            .remove_if(key, |_, current| Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2);
    }

    /// Returns the slot for `key`, creating an empty one on first use
    fn slot(&self, key: &str) -> Slot<T> {
        self.slots
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }
}

impl<T: Clone> CacheManager<T> {
    /// Returns the fresh value for `key`, or runs `producer` and stores its result
    ///
    /// # Arguments
    /// * `key` - Identifies the logical query (e.g., "advisors-Mortgage Advisors-Bristol")
    /// * `producer` - Performs the expensive work on a miss
    ///
    /// # Returns
    /// * `Ok(T)` - The cached value, or the value just produced
    /// * `Err(E)` - The producer failed; nothing is stored and the next call retries
    pub async fn get_or_populate<F, Fut, E>(&self, key: &str, producer: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        if let Some(entry) = guard.as_ref() {
            if !entry.is_expired(self.ttl) {
                debug!(key, "cache hit");
                return Ok(entry.data.clone());
            }
            debug!(key, "cache entry expired");
        } else {
            debug!(key, "cache miss");
        }

        let data = match producer().await {
            Ok(data) => data,
            Err(err) => {
                if guard.is_none() {
                    self.discard_if_unshared(key, &slot);
                }
                return Err(err);
            }
        };
        *guard = Some(CacheEntry::new(data.clone()));
        debug!(key, "cache populated");

        Ok(data)
    }

    /// Reads the entry for `key` without populating it
    ///
    /// Returns `None` if nothing is cached. Stale entries are still returned,
    /// with `is_expired = true`.
    pub async fn read(&self, key: &str) -> Option<CachedData<T>> {
        let slot = self.slots.get(key).map(|slot| Arc::clone(slot.value()))?;
        let guard = slot.lock().await;

        guard.as_ref().map(|entry| CachedData {
            data: entry.data.clone(),
            cached_at: entry.cached_at,
            is_expired: entry.is_expired(self.ttl),
        })
    }

    /// Removes entries older than the TTL, returning how many were dropped
    ///
    /// Slots locked by an in-flight population are left alone.
    pub fn purge_expired(&self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| match slot.try_lock() {
            Ok(guard) => guard.as_ref().is_some_and(|entry| !entry.is_expired(self.ttl)),
            Err(_) => true,
        });
        let purged = before.saturating_sub(self.slots.len());
        if purged > 0 {
            debug!(purged, "expired cache entries purged");
        }
        purged
    }

    /// Stores `data` under `key`, replacing any existing entry
    pub async fn insert(&self, key: &str, data: T) {
        let slot = self.slot(key);
        *slot.lock().await = Some(CacheEntry::new(data));
    }
}
