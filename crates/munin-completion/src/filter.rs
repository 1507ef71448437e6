//! Name filtering for externally sourced suggestions
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Rules for dropping names that should never be suggested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameFilter {
    /// Substring marking runtime clones
    pub clone_marker: String,

    /// Leading character of untranslated localization tokens
    pub localization_marker: char,

    /// Leading string of internal names
    pub hidden_prefix: String,

    /// Effect prefixes, matched case-insensitively
    pub effect_prefixes: Vec<String>,

    /// Minimum number of characters
    pub min_length: usize,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self {
            clone_marker: "(Clone)".to_string(),
            localization_marker: '$',
            hidden_prefix: "_".to_string(),
            effect_prefixes: vec!["vfx_".to_string(), "sfx_".to_string(), "fx_".to_string()],
            min_length: 2,
        }
    }
}

impl NameFilter {
    /// Whether a (trimmed) name may be suggested
    pub fn accepts(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name.chars().count() < self.min_length {
            return false;
        }
        if !self.clone_marker.is_empty() && name.contains(&self.clone_marker) {
            return false;
        }
        if name.starts_with(self.localization_marker) {
            return false;
        }
        if !self.hidden_prefix.is_empty() && name.starts_with(&self.hidden_prefix) {
            return false;
        }
        let lower = name.to_lowercase();
        if self
            .effect_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && lower.starts_with(&prefix.to_lowercase()))
        {
            return false;
        }
        !name.chars().all(|c| c.is_ascii_digit())
    }

    /// Trim, filter, deduplicate and sort
    pub fn apply<I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let unique: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| self.accepts(name))
            .collect();
        sort_names(unique.into_iter().collect())
    }
}

/// Ascending, case-insensitive order with byte order breaking ties
pub fn sort_names(mut names: Vec<String>) -> Vec<String> {
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejections() {
        let filter = NameFilter::default();
        assert!(!filter.accepts(""));
        assert!(!filter.accepts("   "));
        assert!(!filter.accepts("Troll(Clone)"));
        assert!(!filter.accepts("$item_sword"));
        assert!(!filter.accepts("_internal"));
        assert!(!filter.accepts("vfx_fire"));
        assert!(!filter.accepts("SFX_Hit"));
        assert!(!filter.accepts("12345"));
        assert!(!filter.accepts("X"));
        assert!(filter.accepts("Troll"));
        assert!(filter.accepts("Boar2"));
    }

    #[test]
    fn test_apply_dedupes_and_sorts() {
        let filter = NameFilter::default();
        let names = filter.apply(strings(&["troll", "Boar", " Troll ", "Boar", "_x", "deer"]));
        assert_eq!(names, vec!["Boar", "deer", "Troll", "troll"]);
    }

    #[test]
    fn test_sort_names_case_insensitive() {
        assert_eq!(
            sort_names(strings(&["zeta", "Alpha", "beta"])),
            vec!["Alpha", "beta", "zeta"]
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let filter: NameFilter = serde_yaml::from_str("min_length: 4").unwrap();
        assert_eq!(filter.min_length, 4);
        assert_eq!(filter.hidden_prefix, "_");
        assert!(!filter.accepts("Elk"));
    }
}
