//! Host environment queries
//!
//! The policy deciding who is an admin or the host lives outside the
//! framework. Two stock environments are provided: a fixed set of ids, and a
//! single-player session where the only caller holds every privilege.

use std::collections::HashSet;

use crate::caller::{Caller, CallerId};

/// Environment query capability supplied by the host
pub trait CallerEnvironment: Send + Sync {
    fn is_admin(&self, caller: &Caller) -> bool;

    fn is_host(&self, caller: &Caller) -> bool;
}

/// Environment backed by fixed admin and host ids
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    admins: HashSet<CallerId>,
    host: Option<CallerId>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(mut self, id: CallerId) -> Self {
        self.admins.insert(id);
        self
    }

    pub fn with_host(mut self, id: CallerId) -> Self {
        self.host = Some(id);
        self
    }

    pub fn grant_admin(&mut self, id: CallerId) {
        self.admins.insert(id);
    }

    pub fn revoke_admin(&mut self, id: CallerId) {
        self.admins.remove(&id);
    }
}

impl CallerEnvironment for StaticEnvironment {
    fn is_admin(&self, caller: &Caller) -> bool {
        self.admins.contains(&caller.id)
    }

    fn is_host(&self, caller: &Caller) -> bool {
        self.host == Some(caller.id)
    }
}

/// Single-player session: every caller is both admin and host
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePlayerEnvironment;

impl CallerEnvironment for SinglePlayerEnvironment {
    fn is_admin(&self, _caller: &Caller) -> bool {
        true
    }

    fn is_host(&self, _caller: &Caller) -> bool {
        true
    }
}
