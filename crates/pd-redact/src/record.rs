//! Log records and severity levels.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Severity of a log record, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    /// Default threshold for loggers that do not set one.
    #[default]
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Upper-case name used in rendered log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" | "fatal" => Ok(Level::Critical),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log event as seen by formatters and sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Name of the logger that produced the record.
    pub name: String,
    pub level: Level,
    /// Creation time in local time.
    pub created: DateTime<Local>,
    /// Raw message, before rendering and redaction.
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            created: Local::now(),
            message: message.into(),
        }
    }

    /// Override the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }
}
