//! Log levels and structured log entries
//!
//! Entries are written as single JSON lines on stderr, filtered by a
//! threshold level.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Log levels in order of severity (lowest to highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let level_str = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{level_str}")
    }
}

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Parse log level from environment variable, with fallback
    pub fn from_env(var_name: &str) -> Self {
        std::env::var(var_name)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Check if this level should be logged at the given threshold
    pub fn should_log(&self, threshold: LogLevel) -> bool {
        *self >= threshold
    }

    /// Get all valid log level strings (for error messages)
    pub fn valid_values() -> &'static [&'static str] {
        &["trace", "debug", "info", "warn", "error"]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid log level '{0}'. Valid levels are: {levels}",
    levels = LogLevel::valid_values().join(", ")
)]
pub struct InvalidLogLevel(pub String);

/// Structured log entry
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with current timestamp
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            message: message.into(),
            context: None,
        }
    }

    /// Attach structured context to the entry
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Write the entry to stderr if it passes `threshold`
    ///
    /// Returns whether a line was written.
    pub fn emit(&self, threshold: LogLevel) -> bool {
        if !self.level.should_log(threshold) {
            return false;
        }
        match self.to_json_string() {
            Ok(line) => eprintln!("{line}"),
            Err(e) => eprintln!("Failed to serialize log entry: {e}"),
        }
        true
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, message)
    }
}
