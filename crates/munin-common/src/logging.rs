//! Logging bootstrap
//!
//! Libraries only emit `tracing` events. Binaries call [`init_logging`] once
//! to install a stderr `fmt` subscriber filtered by a minimum level.

use std::fmt;
use std::str::FromStr;

use tracing::Level;

/// Minimum log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// Parse log level from string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" | "WARNING" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// The equivalent `tracing` level
    pub fn as_tracing_level(&self) -> Level {
        match self {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s).ok_or_else(|| format!("unknown log level: {}", s))
    }
}

/// Logging configuration options
#[derive(Debug, Clone, Copy)]
pub struct LogOptions {
    /// Minimum level that is written
    pub level: LogLevel,
    /// Emit ANSI colors in log lines
    pub ansi: bool,
    /// Include the event target (module path)
    pub with_target: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            ansi: true,
            with_target: false,
        }
    }
}

impl LogOptions {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Install the global subscriber
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init_logging(options: LogOptions) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(options.level.as_tracing_level())
        .with_ansi(options.ansi)
        .with_target(options.with_target)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
