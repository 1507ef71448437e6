//! Command dispatch
//!
//! Resolves a raw console line to a built-in or namespaced command, gates it
//! on the caller's permission, parses the remaining text and runs the handler
//! with panics and errors converted to [`CommandResult::Error`].
//!
//! Unwinding still runs the process panic hook, so hosts that want a quiet
//! console should install their own hook.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use munin_permissions::{Caller, CallerEnvironment, PermissionChecker};
use tracing::{debug, debug_span, error};

use crate::args::CommandArgs;
use crate::config::DispatcherConfig;
use crate::format::ResultFormatter;
use crate::help::HelpRenderer;
use crate::registry::{CommandRegistry, SharedRegistry};
use crate::result::CommandResult;
use crate::types::CommandConfig;

const HELP: &str = "help";

/// Outcome of resolving a line while the registry lock is held
enum Resolved<'a> {
    Run(Arc<CommandConfig>, &'a str),
    Done(CommandResult),
}

/// Executes console lines against a shared registry
pub struct Dispatcher {
    registry: SharedRegistry,
    environment: Arc<dyn CallerEnvironment>,
    config: DispatcherConfig,
    formatter: ResultFormatter,
}

impl Dispatcher {
    pub fn new(registry: SharedRegistry, environment: Arc<dyn CallerEnvironment>) -> Self {
        let config = DispatcherConfig::default();
        let formatter = formatter_for(&config);
        Self {
            registry,
            environment,
            config,
            formatter,
        }
    }

    pub fn with_config(mut self, config: DispatcherConfig) -> Self {
        self.formatter = formatter_for(&config);
        self.config = config;
        self
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    /// Execute a console line on behalf of `caller`
    ///
    /// Never panics and never returns an error; every failure is reported
    /// as a [`CommandResult`].
    pub fn execute(&self, raw: &str, caller: Option<&Caller>) -> CommandResult {
        let input = raw.trim();
        debug!(input, caller = ?caller.map(|c| c.id), "Dispatching command");

        if input.is_empty() {
            return CommandResult::error(format!(
                "No command given. Type '{} help' for a list of commands.",
                self.config.root_command
            ));
        }

        let (first, rest) = split_first_token(input);
        if first.eq_ignore_ascii_case(HELP) {
            return self.help(rest, caller);
        }

        let resolved = {
            let registry = self.registry.read();
            self.resolve(&registry, first, rest, caller)
        };

        match resolved {
            Resolved::Run(config, arg_text) => self.run(config, arg_text, caller),
            Resolved::Done(result) => result,
        }
    }

    /// Execute and render to a display string; `None` for silent results
    pub fn execute_formatted(&self, raw: &str, caller: Option<&Caller>) -> Option<String> {
        self.formatter.format(&self.execute(raw, caller))
    }

    fn resolve<'a>(
        &self,
        registry: &CommandRegistry,
        first: &'a str,
        rest: &'a str,
        caller: Option<&Caller>,
    ) -> Resolved<'a> {
        if let Some(config) = registry.get(first) {
            return Resolved::Run(config, rest);
        }

        if registry.has_namespace(first) {
            let (sub, sub_rest) = split_first_token(rest);
            if sub.is_empty() || sub.eq_ignore_ascii_case(HELP) {
                return Resolved::Done(self.renderer().namespace(registry, first, |config| {
                    self.is_visible(config, caller)
                }));
            }
            return match registry.get_in(first, sub) {
                Some(config) => Resolved::Run(config, sub_rest),
                None => Resolved::Done(CommandResult::not_found(format!(
                    "Unknown command '{}' in mod '{}'. Type '{} help {}' for its commands.",
                    sub, first, self.config.root_command, first
                ))),
            };
        }

        Resolved::Done(CommandResult::not_found(format!(
            "Unknown command: '{}'. Type '{} help' for a list of commands.",
            first, self.config.root_command
        )))
    }

    fn help(&self, rest: &str, caller: Option<&Caller>) -> CommandResult {
        let registry = self.registry.read();
        let renderer = self.renderer();
        let visible = |config: &CommandConfig| self.is_visible(config, caller);

        let (name, sub_rest) = split_first_token(rest);
        if name.is_empty() {
            return renderer.general(&registry, visible);
        }

        if let Some(config) = registry.get(name) {
            return renderer.command(&config);
        }

        if registry.has_namespace(name) {
            let (sub, _) = split_first_token(sub_rest);
            if sub.is_empty() {
                return renderer.namespace(&registry, name, visible);
            }
            return match registry.get_in(name, sub) {
                Some(config) => renderer.command(&config),
                None => CommandResult::not_found(format!(
                    "Unknown command '{}' in mod '{}'.",
                    sub, name
                )),
            };
        }

        CommandResult::not_found(format!("No help found for '{}'.", name))
    }

    fn run(&self, config: Arc<CommandConfig>, arg_text: &str, caller: Option<&Caller>) -> CommandResult {
        if !PermissionChecker::has_permission(self.environment.as_ref(), caller, config.permission) {
            return CommandResult::no_permission(format!(
                "You don't have permission to use '{}' (requires {}).",
                config.name, config.permission
            ));
        }

        let Some(handler) = config.handler.clone() else {
            return CommandResult::error(format!("Command '{}' has no handler.", config.name));
        };

        let args = CommandArgs::parse(arg_text, caller);
        let span = debug_span!(
            "command",
            name = %config.name,
            namespace = config.namespace().unwrap_or("-")
        );
        let _enter = span.enter();

        match panic::catch_unwind(AssertUnwindSafe(|| (handler.as_ref())(&args))) {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                error!(command = %config.name, error = %format!("{:#}", err), "Command failed");
                CommandResult::error(format!("Command failed: {:#}", err))
            }
            Err(payload) => {
                let description = panic_message(payload.as_ref());
                error!(command = %config.name, panic = %description, "Command panicked");
                CommandResult::error(format!("Command failed: {}", description))
            }
        }
    }

    fn is_visible(&self, config: &CommandConfig, caller: Option<&Caller>) -> bool {
        !config.hidden
            && PermissionChecker::has_permission(self.environment.as_ref(), caller, config.permission)
    }

    fn renderer(&self) -> HelpRenderer<'_> {
        HelpRenderer::new(&self.config.root_command)
    }
}

fn formatter_for(config: &DispatcherConfig) -> ResultFormatter {
    ResultFormatter::new(config.theme.clone()).with_separator(config.column_separator.clone())
}

/// Split off the first whitespace-delimited token; the remainder is left-trimmed
pub fn split_first_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
