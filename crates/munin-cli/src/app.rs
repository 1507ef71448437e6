// Wiring of registry, dispatcher and completion engine for the demo host
use std::sync::Arc;

use munin_commands::{resolve_player, split_first_token, Caller, CommandRegistry, Dispatcher};
use munin_completion::{CompletionEngine, SuggestionCache};
use tracing::info;

use crate::config::AppConfig;
use crate::demo;
use crate::error::{CliError, CliResult};
use crate::render::Renderer;

/// A console session bound to one caller
pub struct App {
    dispatcher: Dispatcher,
    engine: Arc<CompletionEngine>,
    renderer: Renderer,
    caller: Caller,
}

impl App {
    /// Build the demo host; `caller_name` picks a roster member, the host by default
    pub fn new(config: AppConfig, caller_name: Option<&str>, renderer: Renderer) -> CliResult<Self> {
        let roster = Arc::new(demo::roster());
        let environment = Arc::new(demo::environment());

        let registry = CommandRegistry::shared();
        let count = demo::register_commands(
            &mut registry.write(),
            Arc::clone(&roster),
            Arc::clone(&environment),
        )?;
        info!(commands = count, "Registered demo commands");

        let caller = match caller_name {
            Some(name) => resolve_player(name, &*roster)
                .map(|entry| entry.caller)
                .ok_or_else(|| CliError::InvalidArgument {
                    message: format!("no roster member matches '{}'", name),
                })?,
            None => demo::roster()
                .into_iter()
                .map(|entry| entry.caller)
                .find(|caller| caller.id.0 == demo::HOST_ID)
                .ok_or_else(|| CliError::Config("demo roster has no host".to_string()))?,
        };

        let spawnables = SuggestionCache::new(demo::SPAWNABLES, config.completion.filter.clone())
            .with_source(Arc::new(demo::spawnable_names));
        let engine = CompletionEngine::from_config(Arc::clone(&registry), &config.completion)?
            .with_cache(spawnables)
            .with_roster(roster);

        let dispatcher = Dispatcher::new(registry, environment).with_config(config.dispatcher);

        Ok(Self {
            dispatcher,
            engine: Arc::new(engine),
            renderer,
            caller,
        })
    }

    pub fn root_command(&self) -> &str {
        &self.dispatcher.config().root_command
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    pub fn engine(&self) -> &Arc<CompletionEngine> {
        &self.engine
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Execute one console line and render the result for the terminal
    ///
    /// A leading root word is optional. The root word on its own shows help.
    pub fn execute_line(&self, line: &str) -> Option<String> {
        let (first, rest) = split_first_token(line);
        let command = if first.eq_ignore_ascii_case(self.root_command()) {
            if rest.is_empty() {
                "help"
            } else {
                rest
            }
        } else {
            line
        };

        self.dispatcher
            .execute_formatted(command, Some(&self.caller))
            .map(|text| self.renderer.render(&text))
    }
}
