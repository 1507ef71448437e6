//! Completion engine
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use munin_commands::{Roster, SharedRegistry};
use munin_common::{CacheStats, Invalidate};
use tracing::{debug, warn};

use crate::cache::SuggestionCache;
use crate::config::{CompletionConfig, TriggerSource};
use crate::context::CompletionContext;
use crate::error::CompletionResult;
use crate::filter::sort_names;

const HELP: &str = "help";

/// Suggests the full candidate set for the argument being typed
pub struct CompletionEngine {
    registry: SharedRegistry,
    triggers: HashMap<String, TriggerSource>,
    caches: HashMap<String, Arc<SuggestionCache>>,
    roster: Option<Arc<dyn Roster>>,
}

impl CompletionEngine {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            triggers: HashMap::new(),
            caches: HashMap::new(),
            roster: None,
        }
    }

    /// Create an engine with the triggers of `config`
    pub fn from_config(registry: SharedRegistry, config: &CompletionConfig) -> CompletionResult<Self> {
        let mut engine = Self::new(registry);
        for trigger in &config.triggers {
            let source = trigger.parse_source()?;
            engine = engine.with_trigger(&trigger.command, source);
        }
        Ok(engine)
    }

    pub fn with_trigger(mut self, command: &str, source: TriggerSource) -> Self {
        self.triggers.insert(command.to_lowercase(), source);
        self
    }

    pub fn with_cache(mut self, cache: SuggestionCache) -> Self {
        self.caches
            .insert(cache.name().to_lowercase(), Arc::new(cache));
        self
    }

    pub fn with_roster(mut self, roster: Arc<dyn Roster>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn cache(&self, name: &str) -> Option<&Arc<SuggestionCache>> {
        self.caches.get(&name.to_lowercase())
    }

    pub fn cache_stats(&self, name: &str) -> Option<CacheStats> {
        self.cache(name).map(|cache| cache.stats())
    }

    pub fn trigger(&self, command: &str) -> Option<&TriggerSource> {
        self.triggers.get(&command.to_lowercase())
    }

    /// Candidates for the argument currently being typed in `text`
    pub fn suggest(&self, text: &str) -> Vec<String> {
        let context = CompletionContext::analyze(text);
        match context.position {
            0 | 1 => self.first_level(),
            2 => match context.command() {
                Some(command) => self.second_level(command),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Invalidate one cache by name; false if no such cache exists
    pub fn invalidate_cache(&self, name: &str) -> bool {
        match self.cache(name) {
            Some(cache) => {
                cache.invalidate();
                true
            }
            None => false,
        }
    }

    fn first_level(&self) -> Vec<String> {
        let registry = self.registry.read();
        let mut names: Vec<String> = registry
            .builtin_configs()
            .iter()
            .map(|config| config.name.clone())
            .collect();
        names.push(HELP.to_string());
        names.extend(registry.namespace_display_names());

        let mut names = sort_names(names);
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        names
    }

    fn second_level(&self, command: &str) -> Vec<String> {
        if let Some(source) = self.trigger(command) {
            return self.from_source(source);
        }

        let registry = self.registry.read();
        if registry.has_namespace(command) {
            return sort_names(
                registry
                    .namespace_configs(command)
                    .iter()
                    .map(|config| config.name.clone())
                    .collect(),
            );
        }
        Vec::new()
    }

    fn from_source(&self, source: &TriggerSource) -> Vec<String> {
        match source {
            TriggerSource::Roster => match &self.roster {
                Some(roster) => sort_names(
                    roster
                        .active_callers()
                        .into_iter()
                        .map(|entry| entry.name)
                        .collect(),
                ),
                None => {
                    debug!("Roster trigger without a roster");
                    Vec::new()
                }
            },
            TriggerSource::Cache(name) => match self.cache(name) {
                Some(cache) => (*cache.get()).clone(),
                None => {
                    warn!(cache = %name, "Trigger refers to an unknown suggestion cache");
                    Vec::new()
                }
            },
        }
    }
}

impl Invalidate for CompletionEngine {
    /// Invalidate every cache
    fn invalidate(&self) {
        for cache in self.caches.values() {
            cache.invalidate();
        }
    }
}

impl fmt::Debug for CompletionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionEngine")
            .field("triggers", &self.triggers)
            .field("caches", &self.caches.keys().collect::<Vec<_>>())
            .field("roster", &self.roster.is_some())
            .finish()
    }
}
