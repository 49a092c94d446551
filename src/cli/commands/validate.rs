//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use testdash_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Server URL: {}", config.server.url);
            println!("Reconnect delay: {}s", config.server.reconnect_delay_secs);
            println!("Refresh interval: {}ms", config.dashboard.refresh_ms);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
