//! Log entry types.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
    /// Any other level the server may send. The entry is still rendered.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One row of the execution log.
///
/// Entries are append-only: once created they are never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock time as a preformatted 24-hour `HH:MM:SS` string.
    pub time: String,
    pub level: LogLevel,
    pub step: String,
    pub message: String,
}

impl LogEntry {
    /// Create an entry with an explicit time string.
    pub fn new(
        time: impl Into<String>,
        level: LogLevel,
        step: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            level,
            step: step.into(),
            message: message.into(),
        }
    }

    /// Create an entry stamped with the current local time.
    pub fn now(level: LogLevel, step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(wall_clock_time(), level, step, message)
    }
}

/// Current local time formatted as 24-hour `HH:MM:SS`.
pub fn wall_clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip() {
        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    }

    #[test]
    fn test_level_unknown_fallback() {
        let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, LogLevel::Unknown);
    }

    #[test]
    fn test_level_display_uppercase() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_wall_clock_format() {
        let time = wall_clock_time();
        assert_eq!(time.len(), 8);
        let bytes = time.as_bytes();
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
    }

    #[test]
    fn test_entry_now_uses_wall_clock() {
        let entry = LogEntry::now(LogLevel::Info, "setup", "started");
        assert_eq!(entry.time.len(), 8);
        assert_eq!(entry.step, "setup");
        assert_eq!(entry.message, "started");
    }
}
