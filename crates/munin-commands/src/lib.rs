//! Munin command framework
//!
//! Parses one line of console input into a command invocation, resolves it
//! against a two-level registry (built-in commands and namespaced mod
//! commands), checks permissions, runs the handler and formats the result.
//!
//! # Examples
//!
//! ```ignore
//! use munin_commands::{CommandConfig, CommandRegistry, CommandResult, Dispatcher};
//! use munin_permissions::{Caller, SinglePlayerEnvironment};
//! use std::sync::Arc;
//!
//! let registry = CommandRegistry::shared();
//! registry.write().register(
//!     CommandConfig::new("greet", "Greet someone")
//!         .with_usage("greet <name>")
//!         .with_handler(|args| {
//!             Ok(CommandResult::success(format!("Hello {}", args.get_string(0, "stranger"))))
//!         }),
//! )?;
//!
//! let dispatcher = Dispatcher::new(registry, Arc::new(SinglePlayerEnvironment));
//! let caller = Caller::new(1, "Ragnar");
//! let output = dispatcher.execute_formatted("greet Lagertha", Some(&caller));
//! ```

pub mod args;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod help;
pub mod host;
pub mod registry;
pub mod result;
pub mod types;

pub use args::{tokenize, CommandArgs};
pub use config::{ConfigFormat, ConfigLoader, DispatcherConfig};
pub use dispatcher::{split_first_token, Dispatcher};
pub use error::{CommandError, Result};
pub use format::{ColorCategory, ResultFormatter, Theme};
pub use help::HelpRenderer;
pub use host::{resolve_player, Roster, RosterEntry, SuggestionSource};
pub use registry::{CommandRegistry, SharedRegistry};
pub use result::{CommandResult, ResultKind, TableData};
pub use types::{CommandConfig, CommandHandler};

pub use munin_permissions::{Caller, CallerEnvironment, CallerId, PermissionLevel};
