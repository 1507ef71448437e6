use std::fmt;
use std::sync::Arc;

use munin_permissions::PermissionLevel;

use crate::args::CommandArgs;
use crate::result::CommandResult;

/// Handler invoked with the parsed arguments of one invocation
///
/// Side effects on the host world are the handler's business. Errors and
/// panics escaping a handler are caught by the dispatcher.
pub type CommandHandler = Arc<dyn Fn(&CommandArgs) -> anyhow::Result<CommandResult> + Send + Sync>;

/// A registered command's descriptor
#[derive(Clone)]
pub struct CommandConfig {
    /// Command name, unique (case-insensitively) within its scope
    pub name: String,

    /// One-line description shown in listings
    pub description: String,

    /// Usage line shown in command detail, e.g. `spawn <prefab> [count]`
    pub usage: String,

    /// Required permission level
    pub permission: PermissionLevel,

    /// Handler; registration rejects commands without one
    pub handler: Option<CommandHandler>,

    /// Example invocations shown in command detail
    pub examples: Vec<String>,

    /// Excluded from help listings when set
    pub hidden: bool,

    namespace: Option<String>,
}

impl CommandConfig {
    /// Create a new command config
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: String::new(),
            permission: PermissionLevel::Anyone,
            handler: None,
            examples: Vec::new(),
            hidden: false,
            namespace: None,
        }
    }

    /// Set the usage line
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Set the required permission level
    pub fn with_permission(mut self, permission: PermissionLevel) -> Self {
        self.permission = permission;
        self
    }

    /// Set the handler
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CommandArgs) -> anyhow::Result<CommandResult> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Add an example invocation
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Set whether the command is hidden from listings
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Owning namespace, `None` for built-ins
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Set by the registry at registration time
    pub(crate) fn assign_namespace(&mut self, namespace: Option<&str>) {
        self.namespace = namespace.map(str::to_string);
    }

    /// The usage line, falling back to the bare name
    pub fn usage_line(&self) -> &str {
        if self.usage.is_empty() {
            &self.name
        } else {
            &self.usage
        }
    }
}

impl fmt::Debug for CommandConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandConfig")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .field("permission", &self.permission)
            .field("handler", &self.handler.as_ref().map(|_| "<fn>"))
            .field("examples", &self.examples)
            .field("hidden", &self.hidden)
            .field("namespace", &self.namespace)
            .finish()
    }
}
