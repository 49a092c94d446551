//! Test dashboard CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use testdash_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };

    // The dashboard owns the terminal; its diagnostics go to a log file
    // configured inside the command rather than stdout.
    if !matches!(cli.command, Commands::Dashboard(_)) {
        setup_logging(log_level, cli.json_logs);
    }

    // Execute command
    match cli.command {
        Commands::Dashboard(args) => {
            cli::commands::dashboard::run(args, &cli.config, log_level).await
        }
        Commands::Simulate(args) => cli::commands::simulate::run(args).await,
        Commands::Tests => cli::commands::tests::run().await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
