//! Permission gate for munin
//!
//! Commands declare a [`PermissionLevel`]. Whether a [`Caller`] satisfies it
//! is decided by [`PermissionChecker`] using a host-supplied
//! [`CallerEnvironment`]. Absent callers and unknown levels fail closed.

pub mod caller;
pub mod checker;
pub mod environment;
pub mod error;
pub mod models;

pub use caller::{Caller, CallerId};
pub use checker::PermissionChecker;
pub use environment::{CallerEnvironment, SinglePlayerEnvironment, StaticEnvironment};
pub use error::{Error, Result};
pub use models::PermissionLevel;
