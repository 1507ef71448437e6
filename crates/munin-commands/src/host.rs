//! Collaborator interfaces implemented by the host
//!
//! The framework never looks into the host's world model. It only asks for
//! names: the active roster, and enumerable sources of suggestion names.

use munin_permissions::Caller;

/// One active caller as listed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub caller: Caller,
}

impl RosterEntry {
    pub fn new(caller: Caller) -> Self {
        Self {
            name: caller.name.clone(),
            caller,
        }
    }
}

/// Enumerates the currently active callers
pub trait Roster: Send + Sync {
    fn active_callers(&self) -> Vec<RosterEntry>;
}

impl Roster for Vec<RosterEntry> {
    fn active_callers(&self) -> Vec<RosterEntry> {
        self.clone()
    }
}

/// An external, possibly expensive, enumerable source of names
pub trait SuggestionSource: Send + Sync {
    fn enumerate_names(&self) -> Vec<String>;
}

impl<F> SuggestionSource for F
where
    F: Fn() -> Vec<String> + Send + Sync,
{
    fn enumerate_names(&self) -> Vec<String> {
        self()
    }
}

/// Resolve a name against the roster
///
/// An exact case-insensitive match wins; otherwise the first entry (in the
/// roster's iteration order) whose name contains the query, ignoring case.
pub fn resolve_player(query: &str, roster: &dyn Roster) -> Option<RosterEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let entries = roster.active_callers();
    if let Some(exact) = entries.iter().find(|e| e.name.to_lowercase() == query) {
        return Some(exact.clone());
    }
    entries
        .into_iter()
        .find(|e| e.name.to_lowercase().contains(&query))
}
