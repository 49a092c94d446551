//! Live dashboard command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use testdash_config::load_config;
use testdash_core::traits::CommandChannel;
use testdash_core::types::TestCatalog;
use testdash_monitor::{setup_file_logging, Dashboard, DashboardController};
use testdash_runner::SimulatedRunner;
use testdash_transport::{StandaloneChannel, TransportConfig, TransportSupervisor};
use tokio::sync::mpsc;
use tracing::warn;

use crate::cli::DashboardArgs;

pub async fn run(args: DashboardArgs, config_path: &Path, log_level: &str) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| "testdash.log".to_string());
    let _guard =
        setup_file_logging(log_level, Path::new(&log_file)).context("Failed to open log file")?;

    let (transport_tx, transport_rx) = mpsc::unbounded_channel();
    let channel: Arc<dyn CommandChannel> = if args.standalone {
        Arc::new(StandaloneChannel)
    } else {
        let transport_config = TransportConfig {
            url: args.server.unwrap_or(config.server.url),
            reconnect_delay: Duration::from_secs(config.server.reconnect_delay_secs),
        };
        match TransportSupervisor::spawn(transport_config, transport_tx) {
            Ok(handle) => Arc::new(handle),
            Err(e) => {
                // Construction failure: no retry loop, local simulation
                // keeps working.
                warn!("Connection failed, running in standalone mode: {}", e);
                Arc::new(StandaloneChannel)
            }
        }
    };

    let (entries_tx, entries_rx) = mpsc::unbounded_channel();
    let runner = Arc::new(SimulatedRunner::new(entries_tx));
    let controller = DashboardController::new(channel, runner, TestCatalog::builtin());

    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let events = controller.clone();
    let events_task = tokio::spawn(async move {
        events.run(ui_rx, transport_rx, entries_rx).await;
    });

    let dashboard = Dashboard::new(config.dashboard.refresh_ms);
    let snapshot = controller.clone();
    tokio::task::spawn_blocking(move || dashboard.run(move || snapshot.snapshot(), ui_tx))
        .await
        .context("Dashboard thread panicked")??;

    events_task.await?;
    Ok(())
}
