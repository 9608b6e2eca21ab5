//! In-memory cache for advisor lookups
//!
//! This module provides a cache manager that keeps produced values in process
//! memory with an explicit TTL (time-to-live). Concurrent requests for the same
//! key share one population, so an expensive producer runs at most once per
//! fresh entry.

mod manager;

pub use manager::{CacheManager, CachedData, DEFAULT_CACHE_TTL};
