//! Lazily built, wholesale-invalidated suggestion cache
use std::fmt;
use std::sync::Arc;

use munin_commands::SuggestionSource;
use munin_common::{CacheStats, Invalidate};
use parking_lot::Mutex;
use tracing::debug;

use crate::filter::NameFilter;

/// Cached, filtered names pulled from one or more external sources
///
/// The snapshot is built on first read and replaced only after
/// [`invalidate`](Invalidate::invalidate); readers receive a shared
/// `Arc<Vec<String>>` so a later rebuild never mutates what they hold.
pub struct SuggestionCache {
    name: String,
    sources: Vec<Arc<dyn SuggestionSource>>,
    filter: NameFilter,
    snapshot: Mutex<Option<Arc<Vec<String>>>>,
    stats: Mutex<CacheStats>,
}

impl SuggestionCache {
    pub fn new(name: impl Into<String>, filter: NameFilter) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            filter,
            snapshot: Mutex::new(None),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    pub fn with_source(mut self, source: Arc<dyn SuggestionSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Current names, rebuilding synchronously if the cache is empty
    pub fn get(&self) -> Arc<Vec<String>> {
        let mut snapshot = self.snapshot.lock();
        if let Some(names) = snapshot.as_ref() {
            self.stats.lock().hits += 1;
            return Arc::clone(names);
        }

        let names = Arc::new(self.build());
        *snapshot = Some(Arc::clone(&names));

        let mut stats = self.stats.lock();
        stats.misses += 1;
        stats.rebuilds += 1;
        stats.size = names.len();
        debug!(cache = %self.name, size = names.len(), "Rebuilt suggestion cache");
        names
    }

    pub fn is_built(&self) -> bool {
        self.snapshot.lock().is_some()
    }

    pub fn stats(&self) -> CacheStats {
        *self.stats.lock()
    }

    fn build(&self) -> Vec<String> {
        self.filter.apply(
            self.sources
                .iter()
                .flat_map(|source| source.enumerate_names()),
        )
    }
}

impl Invalidate for SuggestionCache {
    fn invalidate(&self) {
        if self.snapshot.lock().take().is_some() {
            self.stats.lock().size = 0;
            debug!(cache = %self.name, "Invalidated suggestion cache");
        }
    }
}

impl fmt::Debug for SuggestionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionCache")
            .field("name", &self.name)
            .field("sources", &self.sources.len())
            .field("filter", &self.filter)
            .field("stats", &self.stats())
            .finish()
    }
}
