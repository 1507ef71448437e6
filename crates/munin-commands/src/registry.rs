//! Command registry
//!
//! Two tables: built-in commands keyed by name, and namespaces keyed by name
//! each holding their own command table. All keys are compared
//! case-insensitively. A namespace exists exactly as long as it holds at
//! least one command.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::{CommandError, Result};
use crate::types::CommandConfig;

/// Registry shared between the dispatcher, the completion engine and the host
pub type SharedRegistry = Arc<RwLock<CommandRegistry>>;

fn key(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone)]
struct Namespace {
    /// Spelling used when the namespace was first registered
    display_name: String,
    commands: HashMap<String, Arc<CommandConfig>>,
}

/// Registry of built-in and namespaced commands
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    builtins: HashMap<String, Arc<CommandConfig>>,
    namespaces: HashMap<String, Namespace>,
}

impl CommandRegistry {
    /// Create a new empty command registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry behind a shared lock
    pub fn shared() -> SharedRegistry {
        Self::new().into_shared()
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    fn validate(config: &CommandConfig) -> Result<()> {
        if config.name.is_empty() {
            return Err(CommandError::InvalidCommandName(
                "Command name cannot be empty".to_string(),
            ));
        }
        if config.name.chars().any(char::is_whitespace) {
            return Err(CommandError::InvalidCommandName(format!(
                "Command name cannot contain whitespace: '{}'",
                config.name
            )));
        }
        if config.handler.is_none() {
            return Err(CommandError::MissingHandler(config.name.clone()));
        }
        Ok(())
    }

    fn validate_namespace(namespace: &str) -> Result<()> {
        if namespace.is_empty() {
            return Err(CommandError::InvalidNamespace(
                "Namespace cannot be empty".to_string(),
            ));
        }
        if namespace.chars().any(char::is_whitespace) {
            return Err(CommandError::InvalidNamespace(format!(
                "Namespace cannot contain whitespace: '{}'",
                namespace
            )));
        }
        Ok(())
    }

    /// Register a built-in command, overwriting any command of the same name
    pub fn register(&mut self, mut config: CommandConfig) -> Result<()> {
        Self::validate(&config)?;
        config.assign_namespace(None);

        let name = config.name.clone();
        if key(&name) == "help" {
            warn!(command = %name, "'help' is reserved; this command is shadowed by help and unreachable");
        }
        if self.builtins.insert(key(&name), Arc::new(config)).is_some() {
            warn!(command = %name, "overwriting existing command");
        } else {
            debug!(command = %name, "registered command");
        }
        Ok(())
    }

    /// Register a command into `namespace`, creating the namespace if needed
    pub fn register_in(&mut self, namespace: &str, mut config: CommandConfig) -> Result<()> {
        Self::validate_namespace(namespace)?;
        Self::validate(&config)?;
        config.assign_namespace(Some(namespace));

        let name = config.name.clone();
        let entry = self
            .namespaces
            .entry(key(namespace))
            .or_insert_with(|| Namespace {
                display_name: namespace.to_string(),
                commands: HashMap::new(),
            });

        if entry.commands.insert(key(&name), Arc::new(config)).is_some() {
            warn!(namespace = %namespace, command = %name, "overwriting existing command");
        } else {
            debug!(namespace = %namespace, command = %name, "registered command");
        }
        Ok(())
    }

    /// Register several built-ins, stopping at the first invalid one
    pub fn register_many<I>(&mut self, configs: I) -> Result<usize>
    where
        I: IntoIterator<Item = CommandConfig>,
    {
        let mut count = 0;
        for config in configs {
            self.register(config)?;
            count += 1;
        }
        Ok(count)
    }

    /// Register several commands into `namespace`, stopping at the first invalid one
    pub fn register_many_in<I>(&mut self, namespace: &str, configs: I) -> Result<usize>
    where
        I: IntoIterator<Item = CommandConfig>,
    {
        let mut count = 0;
        for config in configs {
            self.register_in(namespace, config)?;
            count += 1;
        }
        Ok(count)
    }

    /// Remove a built-in; returns whether anything was removed
    pub fn unregister(&mut self, name: &str) -> bool {
        let removed = self.builtins.remove(&key(name)).is_some();
        if removed {
            debug!(command = %name, "unregistered command");
        }
        removed
    }

    /// Remove a namespaced command; drops the namespace once it is empty
    pub fn unregister_in(&mut self, namespace: &str, name: &str) -> bool {
        let ns_key = key(namespace);
        let Some(entry) = self.namespaces.get_mut(&ns_key) else {
            return false;
        };

        let removed = entry.commands.remove(&key(name)).is_some();
        if entry.commands.is_empty() {
            self.namespaces.remove(&ns_key);
            debug!(namespace = %namespace, "namespace removed");
        }
        removed
    }

    /// Remove a namespace and all of its commands; returns how many were removed
    pub fn unregister_namespace(&mut self, namespace: &str) -> usize {
        match self.namespaces.remove(&key(namespace)) {
            Some(entry) => {
                debug!(namespace = %namespace, count = entry.commands.len(), "namespace removed");
                entry.commands.len()
            }
            None => 0,
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.builtins.contains_key(&key(name))
    }

    pub fn exists_in(&self, namespace: &str, name: &str) -> bool {
        self.get_in(namespace, name).is_some()
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(&key(namespace))
    }

    pub fn get(&self, name: &str) -> Option<Arc<CommandConfig>> {
        self.builtins.get(&key(name)).cloned()
    }

    pub fn get_in(&self, namespace: &str, name: &str) -> Option<Arc<CommandConfig>> {
        self.namespaces
            .get(&key(namespace))
            .and_then(|entry| entry.commands.get(&key(name)))
            .cloned()
    }

    /// Lowercased namespace names, sorted
    pub fn list_namespaces(&self) -> Vec<String> {
        sorted(self.namespaces.keys().cloned())
    }

    /// Lowercased command names of a namespace, sorted; empty if unknown
    pub fn list_namespace_commands(&self, namespace: &str) -> Vec<String> {
        self.namespaces
            .get(&key(namespace))
            .map(|entry| sorted(entry.commands.keys().cloned()))
            .unwrap_or_default()
    }

    /// Lowercased built-in names, sorted
    pub fn list_builtins(&self) -> Vec<String> {
        sorted(self.builtins.keys().cloned())
    }

    /// Built-in configs, sorted by name
    pub fn builtin_configs(&self) -> Vec<Arc<CommandConfig>> {
        sorted_configs(self.builtins.values())
    }

    /// Configs of a namespace, sorted by name; empty if unknown
    pub fn namespace_configs(&self, namespace: &str) -> Vec<Arc<CommandConfig>> {
        self.namespaces
            .get(&key(namespace))
            .map(|entry| sorted_configs(entry.commands.values()))
            .unwrap_or_default()
    }

    /// Namespace name as first registered
    pub fn namespace_display_name(&self, namespace: &str) -> Option<&str> {
        self.namespaces
            .get(&key(namespace))
            .map(|entry| entry.display_name.as_str())
    }

    /// Namespace names as first registered, unsorted
    pub fn namespace_display_names(&self) -> Vec<String> {
        self.namespaces
            .values()
            .map(|entry| entry.display_name.clone())
            .collect()
    }

    pub fn namespace_command_count(&self, namespace: &str) -> usize {
        self.namespaces
            .get(&key(namespace))
            .map(|entry| entry.commands.len())
            .unwrap_or(0)
    }

    /// Total number of registered commands, built-in and namespaced
    pub fn count(&self) -> usize {
        self.builtins.len()
            + self
                .namespaces
                .values()
                .map(|entry| entry.commands.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Remove every command and namespace
    pub fn clear(&mut self) {
        self.builtins.clear();
        self.namespaces.clear();
    }
}

fn sorted(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.collect();
    names.sort();
    names
}

fn sorted_configs<'a>(
    configs: impl Iterator<Item = &'a Arc<CommandConfig>>,
) -> Vec<Arc<CommandConfig>> {
    let mut configs: Vec<Arc<CommandConfig>> = configs.cloned().collect();
    configs.sort_by_key(|config| key(&config.name));
    configs
}
