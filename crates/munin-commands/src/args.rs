//! Argument parsing
//!
//! Raw argument text is split into tokens (quotes group whitespace) and each
//! token is classified, in order, as a named argument (`--key=value`), a
//! long flag (`--flag`), a bundle of short flags (`-abc`) or a positional
//! argument. Typed getters never fail: malformed or missing values yield the
//! caller-supplied default.

use std::collections::{BTreeMap, BTreeSet};

use munin_permissions::Caller;

use crate::host::{resolve_player, Roster, RosterEntry};

/// Split raw text into tokens
///
/// A `"` or `'` opens a quoted run closed by the same character; whitespace
/// inside the run does not split and the quotes are dropped. An unterminated
/// quote runs to the end of input. Empty tokens are never emitted.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Closed set of string coercions used by the typed getters
pub mod coerce {
    pub fn parse_string(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    pub fn parse_int(value: &str) -> Option<i32> {
        value.trim().parse().ok()
    }

    pub fn parse_long(value: &str) -> Option<i64> {
        value.trim().parse().ok()
    }

    /// Non-finite values (`NaN`, `inf`) are rejected
    pub fn parse_float(value: &str) -> Option<f32> {
        value
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Non-finite values (`NaN`, `inf`) are rejected
    pub fn parse_double(value: &str) -> Option<f64> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// `true`, `1`, `yes` and `on` (any case) are true, everything else false
    pub fn parse_bool(value: &str) -> Option<bool> {
        let value = value.trim().to_ascii_lowercase();
        Some(matches!(value.as_str(), "true" | "1" | "yes" | "on"))
    }
}

/// Immutable snapshot of one parsed invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
    flags: BTreeSet<String>,
    raw: String,
    caller: Option<Caller>,
}

impl CommandArgs {
    /// Parse argument text for `caller`
    pub fn parse(text: &str, caller: Option<&Caller>) -> Self {
        let mut args = CommandArgs {
            raw: text.to_string(),
            caller: caller.cloned(),
            ..Default::default()
        };

        for token in tokenize(text) {
            args.classify(token);
        }
        args
    }

    fn classify(&mut self, token: String) {
        if let Some(rest) = token.strip_prefix("--") {
            match token.find('=') {
                Some(eq) if eq > 2 => {
                    self.named
                        .insert(token[2..eq].to_string(), token[eq + 1..].to_string());
                    return;
                }
                None => {
                    self.flags.insert(rest.to_string());
                    return;
                }
                // `--=...` is neither named nor a long flag; it falls through to the bundle rule
                Some(_) => {}
            }
        }

        let mut chars = token.chars();
        if chars.next() == Some('-') {
            if let Some(second) = chars.clone().next() {
                if !second.is_ascii_digit() {
                    for c in chars {
                        self.flags.insert(c.to_string());
                    }
                    return;
                }
            }
        }

        self.positional.push(token);
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn named(&self) -> &BTreeMap<String, String> {
        &self.named
    }

    pub fn flags(&self) -> &BTreeSet<String> {
        &self.flags
    }

    /// The argument text as received, before tokenization
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn caller(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }

    /// Number of positional arguments
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Whether at least `count` positional arguments are present
    pub fn has_required(&self, count: usize) -> bool {
        self.positional.len() >= count
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn has_named(&self, key: &str) -> bool {
        self.named.contains_key(key)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn named_str(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    pub fn get_string(&self, index: usize, default: &str) -> String {
        self.get(index)
            .and_then(coerce::parse_string)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_int(&self, index: usize, default: i32) -> i32 {
        self.get(index).and_then(coerce::parse_int).unwrap_or(default)
    }

    pub fn get_long(&self, index: usize, default: i64) -> i64 {
        self.get(index).and_then(coerce::parse_long).unwrap_or(default)
    }

    pub fn get_float(&self, index: usize, default: f32) -> f32 {
        self.get(index).and_then(coerce::parse_float).unwrap_or(default)
    }

    pub fn get_double(&self, index: usize, default: f64) -> f64 {
        self.get(index)
            .and_then(coerce::parse_double)
            .unwrap_or(default)
    }

    pub fn get_bool(&self, index: usize, default: bool) -> bool {
        self.get(index).and_then(coerce::parse_bool).unwrap_or(default)
    }

    pub fn get_named_string(&self, key: &str, default: &str) -> String {
        self.named_str(key)
            .and_then(coerce::parse_string)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_named_int(&self, key: &str, default: i32) -> i32 {
        self.named_str(key)
            .and_then(coerce::parse_int)
            .unwrap_or(default)
    }

    pub fn get_named_long(&self, key: &str, default: i64) -> i64 {
        self.named_str(key)
            .and_then(coerce::parse_long)
            .unwrap_or(default)
    }

    pub fn get_named_float(&self, key: &str, default: f32) -> f32 {
        self.named_str(key)
            .and_then(coerce::parse_float)
            .unwrap_or(default)
    }

    pub fn get_named_double(&self, key: &str, default: f64) -> f64 {
        self.named_str(key)
            .and_then(coerce::parse_double)
            .unwrap_or(default)
    }

    pub fn get_named_bool(&self, key: &str, default: bool) -> bool {
        self.named_str(key)
            .and_then(coerce::parse_bool)
            .unwrap_or(default)
    }

    /// Positional arguments from `start` to the end, joined by single spaces
    pub fn get_rest(&self, start: usize) -> String {
        self.positional
            .get(start..)
            .map(|rest| rest.join(" "))
            .unwrap_or_default()
    }

    /// Resolve the positional argument at `index` against a roster
    pub fn resolve_player(&self, index: usize, roster: &dyn Roster) -> Option<RosterEntry> {
        self.get(index).and_then(|query| resolve_player(query, roster))
    }
}
