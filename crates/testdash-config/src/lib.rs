//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DashboardSettings, LoggingConfig, ServerSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; with no file and no environment overrides the
/// built-in defaults apply.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("TESTDASH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.url, "ws://localhost:8080");
        assert_eq!(config.server.reconnect_delay_secs, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_overlays_defaults() {
        let toml = r#"
            [server]
            url = "ws://orchestrator:9000"
            reconnect_delay_secs = 2
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.url, "ws://orchestrator:9000");
        assert_eq!(config.server.reconnect_delay_secs, 2);
        assert_eq!(config.app.name, "testdash");
        assert_eq!(config.dashboard.refresh_ms, 250);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.server.url, "ws://localhost:8080");
    }
}
