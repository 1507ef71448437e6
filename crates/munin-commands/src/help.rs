//! Help listings and command detail

use crate::registry::CommandRegistry;
use crate::result::CommandResult;
use crate::types::CommandConfig;

const RESERVED: &str = "help";

/// Builds help results for a given console word
pub struct HelpRenderer<'a> {
    root: &'a str,
}

impl<'a> HelpRenderer<'a> {
    pub fn new(root: &'a str) -> Self {
        Self { root }
    }

    /// Visible built-ins sorted by name, then namespaces with their visible command counts
    ///
    /// A built-in or namespace named `help` is shadowed by help itself and never listed.
    pub fn general<F>(&self, registry: &CommandRegistry, is_visible: F) -> CommandResult
    where
        F: Fn(&CommandConfig) -> bool,
    {
        let mut lines = vec!["Commands:".to_string()];
        let builtins: Vec<_> = registry
            .builtin_configs()
            .into_iter()
            .filter(|config| !is_reserved(&config.name) && is_visible(config.as_ref()))
            .collect();
        if builtins.is_empty() {
            lines.push("  (none available)".to_string());
        }
        for config in &builtins {
            lines.push(listing_line(config));
        }

        let namespaces: Vec<(String, usize)> = registry
            .list_namespaces()
            .into_iter()
            .filter(|ns| !is_reserved(ns))
            .filter_map(|ns| {
                let visible = registry
                    .namespace_configs(&ns)
                    .iter()
                    .filter(|config| is_visible(config.as_ref()))
                    .count();
                let name = registry.namespace_display_name(&ns)?.to_string();
                (visible > 0).then_some((name, visible))
            })
            .collect();

        if !namespaces.is_empty() {
            lines.push("Mods:".to_string());
            for (name, count) in namespaces {
                let noun = if count == 1 { "command" } else { "commands" };
                lines.push(format!("  {} ({} {})", name, count, noun));
            }
        }

        lines.push(format!(
            "Type '{} help <command>' or '{} help <mod>' for details.",
            self.root, self.root
        ));
        CommandResult::info(lines.join("\n"))
    }

    /// Visible commands of one namespace
    pub fn namespace<F>(&self, registry: &CommandRegistry, namespace: &str, is_visible: F) -> CommandResult
    where
        F: Fn(&CommandConfig) -> bool,
    {
        let Some(display) = registry.namespace_display_name(namespace) else {
            return CommandResult::not_found(format!("Unknown mod: '{}'", namespace));
        };

        let mut lines = vec![format!("{} commands:", display)];
        let visible: Vec<_> = registry
            .namespace_configs(namespace)
            .into_iter()
            .filter(|config| is_visible(config.as_ref()))
            .collect();
        if visible.is_empty() {
            lines.push("  (none available)".to_string());
        }
        for config in &visible {
            lines.push(listing_line(config));
        }
        lines.push(format!(
            "Type '{} {} <command>' to run a command.",
            self.root, display
        ));
        CommandResult::info(lines.join("\n"))
    }

    /// Name, description, usage, non-default permission and examples
    pub fn command(&self, config: &CommandConfig) -> CommandResult {
        let prefix = match config.namespace() {
            Some(ns) => format!("{} {}", self.root, ns),
            None => self.root.to_string(),
        };

        let mut lines = vec![
            format!("{} - {}", config.name, config.description),
            format!("Usage: {} {}", prefix, config.usage_line()),
        ];
        if !config.permission.is_default() {
            lines.push(format!("Permission: {}", config.permission));
        }
        if !config.examples.is_empty() {
            lines.push("Examples:".to_string());
            for example in &config.examples {
                lines.push(format!("  {} {}", prefix, example));
            }
        }
        CommandResult::info(lines.join("\n"))
    }
}

fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case(RESERVED)
}

fn listing_line(config: &CommandConfig) -> String {
    if config.description.is_empty() {
        format!("  {}", config.name)
    } else {
        format!("  {} - {}", config.name, config.description)
    }
}
