//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "testdash")]
#[command(author, version, about = "Terminal dashboard for test automation runs")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the live dashboard
    Dashboard(DashboardArgs),
    /// Run a simulated test without the TUI
    Simulate(SimulateArgs),
    /// List available tests
    Tests,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct DashboardArgs {
    /// Orchestration server URL (overrides configuration)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Skip the server connection entirely
    #[arg(long)]
    pub standalone: bool,
}

#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Test to run
    #[arg(short, long, default_value = "search-test")]
    pub test: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save entries to file (JSON)
    #[arg(long)]
    pub save: Option<PathBuf>,
}
