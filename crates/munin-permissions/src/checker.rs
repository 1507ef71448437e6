//! Permission checking logic

use tracing::debug;

use crate::{caller::Caller, environment::CallerEnvironment, models::PermissionLevel};

/// Permission checker for evaluating command access
pub struct PermissionChecker;

impl PermissionChecker {
    /// Check whether `caller` satisfies `level`
    ///
    /// `Anyone` always passes, even without a caller. Every other level fails
    /// when the caller is absent. The host satisfies `Admin` as well as `Host`.
    pub fn has_permission(
        environment: &dyn CallerEnvironment,
        caller: Option<&Caller>,
        level: PermissionLevel,
    ) -> bool {
        if level == PermissionLevel::Anyone {
            return true;
        }

        let Some(caller) = caller else {
            debug!(%level, "permission denied: no caller");
            return false;
        };

        let granted = match level {
            PermissionLevel::Anyone => true,
            PermissionLevel::Admin => environment.is_admin(caller) || environment.is_host(caller),
            PermissionLevel::Host => environment.is_host(caller),
        };

        if !granted {
            debug!(caller = %caller, %level, "permission denied");
        }
        granted
    }

    /// Parse a level tag and check it, failing closed on unrecognized tags
    pub fn has_permission_tag(
        environment: &dyn CallerEnvironment,
        caller: Option<&Caller>,
        level: &str,
    ) -> bool {
        match level.parse::<PermissionLevel>() {
            Ok(level) => Self::has_permission(environment, caller, level),
            Err(e) => {
                debug!(error = %e, "permission denied: unrecognized level");
                false
            }
        }
    }
}
