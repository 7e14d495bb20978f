//! Diagnostics logging configuration.
//!
//! Read from `PD_LOG` (level), `RUST_LOG` (fallback level) and
//! `PD_LOG_FORMAT`, then overridden by whatever the command line asked for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_PD_LOG: &str = "PD_LOG";
pub const ENV_RUST_LOG: &str = "RUST_LOG";
pub const ENV_PD_LOG_FORMAT: &str = "PD_LOG_FORMAT";

/// Diagnostics output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Console lines via `tracing_subscriber::fmt`.
    #[default]
    Human,
    /// One redacted JSON object per event.
    Jsonl,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Human => "human",
            LogFormat::Jsonl => "jsonl",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "pretty" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            other => Err(format!("unknown log format '{}' (expected human or jsonl)", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics verbosity, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Off,
    ];

    /// Name as understood by `EnvFilter` directives.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    /// Most verbose level named anywhere in a `RUST_LOG`-style directive list.
    fn most_verbose_in(directives: &str) -> Option<LogLevel> {
        let lowered = directives.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .filter(|level| *level != LogLevel::Off)
            .find(|level| lowered.contains(level.as_str()))
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "warning" => return Ok(LogLevel::Warn),
            "quiet" | "none" => return Ok(LogLevel::Off),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == lowered)
            .ok_or_else(|| format!("unknown log level '{}'", s))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Timestamps on human output.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Human,
            level: LogLevel::Info,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Build from the process environment; `Some` overrides win.
    pub fn from_env(level: Option<LogLevel>, format: Option<LogFormat>) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), level, format)
    }

    /// Like [`LogConfig::from_env`] with an injected variable lookup.
    ///
    /// Unparseable values are ignored and leave the default in place.
    pub fn from_lookup<F>(lookup: F, level: Option<LogLevel>, format: Option<LogFormat>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_level = match lookup(ENV_PD_LOG) {
            Some(val) => val.parse().ok(),
            None => lookup(ENV_RUST_LOG).and_then(|val| LogLevel::most_verbose_in(&val)),
        };
        let env_format = lookup(ENV_PD_LOG_FORMAT).and_then(|val| val.parse().ok());

        let defaults = LogConfig::default();
        LogConfig {
            level: level.or(env_level).unwrap_or(defaults.level),
            format: format.or(env_format).unwrap_or(defaults.format),
            ..defaults
        }
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset or invalid.
    pub fn directive(&self) -> String {
        format!("pd_core={level},pd_redact={level}", level = self.level)
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }
}
