//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "testdash".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Log file used while the TUI owns the terminal.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Orchestration server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub url: String,
    pub reconnect_delay_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: "ws://localhost:8080".to_string(),
            reconnect_delay_secs: 5,
        }
    }
}

/// TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub refresh_ms: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self { refresh_ms: 250 }
    }
}
