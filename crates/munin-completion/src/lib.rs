//! Munin completion engine
//!
//! Suggests candidates for the argument currently being typed on the console.
//! Every call re-derives its context from the full input line; nothing is
//! retained between calls except the suggestion caches.
//!
//! # Positions
//!
//! The line includes the root console word, so `munin sp` is position 1 and
//! `munin spawn ` is position 2:
//!
//! - position 0 or 1: built-in command names, `help` and namespace names
//! - position 2 after a trigger command: the trigger's cache or the roster
//! - position 2 after a namespace: the namespace's command names
//! - anything deeper: nothing
//!
//! The engine never filters by the partially typed token; the console
//! surface does that.
//!
//! # Example
//!
//! ```ignore
//! use munin_completion::{CompletionEngine, NameFilter, SuggestionCache, TriggerSource};
//! use std::sync::Arc;
//!
//! let spawnables = SuggestionCache::new("spawnables", NameFilter::default())
//!     .with_source(Arc::new(|| vec!["Troll".to_string(), "Boar".to_string()]));
//!
//! let engine = CompletionEngine::new(registry)
//!     .with_cache(spawnables)
//!     .with_trigger("spawn", TriggerSource::Cache("spawnables".to_string()));
//!
//! assert_eq!(engine.suggest("munin spawn "), vec!["Boar", "Troll"]);
//! ```

pub mod cache;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod filter;

pub use cache::SuggestionCache;
pub use config::{CompletionConfig, ConfigFormat, ConfigLoader, TriggerConfig, TriggerSource};
pub use context::CompletionContext;
pub use engine::CompletionEngine;
pub use error::{CompletionError, CompletionResult};
pub use filter::{sort_names, NameFilter};

pub use munin_common::{CacheStats, Invalidate};
