//! Shared utilities for munin crates
//!
//! - [`logging`]: tracing subscriber bootstrap with a minimum level
//! - [`cache`]: cache statistics and the invalidation contract used by
//!   lazily built caches

pub mod cache;
pub mod logging;

pub use cache::{CacheStats, Invalidate};
pub use logging::{init_logging, LogLevel, LogOptions};
