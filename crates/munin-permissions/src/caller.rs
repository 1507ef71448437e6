//! Caller identity
//!
//! The framework treats callers as opaque handles that are passed through to
//! handlers and to the host's [`CallerEnvironment`](crate::CallerEnvironment).

use std::fmt;

/// Host-assigned identifier of a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallerId(pub u64);

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The invoker of a command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller {
    pub id: CallerId,
    pub name: String,
}

impl Caller {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CallerId(id),
            name: name.into(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
