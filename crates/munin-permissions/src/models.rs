//! Permission data models

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Authorization requirement of a command, in increasing order of restriction
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// Any caller may run the command
    #[default]
    Anyone,
    /// Only admins (or the host) may run the command
    Admin,
    /// Only the session host may run the command
    Host,
}

impl PermissionLevel {
    /// Check if this permission level is more restrictive than another
    pub fn is_more_restrictive_than(&self, other: PermissionLevel) -> bool {
        *self > other
    }

    /// Whether help output should tag commands at this level
    pub fn is_default(&self) -> bool {
        *self == PermissionLevel::Anyone
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionLevel::Anyone => write!(f, "anyone"),
            PermissionLevel::Admin => write!(f, "admin"),
            PermissionLevel::Host => write!(f, "host"),
        }
    }
}

impl FromStr for PermissionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anyone" => Ok(PermissionLevel::Anyone),
            "admin" => Ok(PermissionLevel::Admin),
            "host" => Ok(PermissionLevel::Host),
            other => Err(Error::InvalidPermissionLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_level_display() {
        assert_eq!(PermissionLevel::Anyone.to_string(), "anyone");
        assert_eq!(PermissionLevel::Admin.to_string(), "admin");
        assert_eq!(PermissionLevel::Host.to_string(), "host");
    }

    #[test]
    fn test_permission_level_restrictiveness() {
        assert!(PermissionLevel::Host.is_more_restrictive_than(PermissionLevel::Admin));
        assert!(PermissionLevel::Admin.is_more_restrictive_than(PermissionLevel::Anyone));
        assert!(!PermissionLevel::Anyone.is_more_restrictive_than(PermissionLevel::Admin));
        assert!(!PermissionLevel::Admin.is_more_restrictive_than(PermissionLevel::Admin));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("ADMIN".parse::<PermissionLevel>(), Ok(PermissionLevel::Admin));
        assert_eq!(" host".parse::<PermissionLevel>(), Ok(PermissionLevel::Host));
        assert_eq!(
            "root".parse::<PermissionLevel>(),
            Err(Error::InvalidPermissionLevel("root".to_string()))
        );
    }

    #[test]
    fn test_default_is_anyone() {
        assert_eq!(PermissionLevel::default(), PermissionLevel::Anyone);
        assert!(PermissionLevel::Anyone.is_default());
        assert!(!PermissionLevel::Host.is_default());
    }

    #[test]
    fn test_permission_level_serialization() {
        let json = serde_json::to_string(&PermissionLevel::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let deserialized: PermissionLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PermissionLevel::Admin);
        assert!(serde_json::from_str::<PermissionLevel>("\"root\"").is_err());
    }
}
