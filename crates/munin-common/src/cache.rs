//! Common cache traits
//!
//! Lazily built caches expose a single inbound `invalidate` call and track
//! how often they were served, missed, and rebuilt.

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from an already built snapshot
    pub hits: u64,
    /// Requests that found the cache empty
    pub misses: u64,
    /// Number of times the cache was built from its sources
    pub rebuilds: u64,
    /// Number of entries in the current snapshot
    pub size: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Wholesale invalidation of a cache
///
/// Implementations must be idempotent and callable at any time. The next
/// read after an invalidation rebuilds the cache synchronously.
pub trait Invalidate: Send + Sync {
    fn invalidate(&self);
}
