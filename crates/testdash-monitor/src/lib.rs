//! Dashboard controller and TUI.

mod controller;
mod dashboard;
mod logging;

pub use controller::{DashboardController, DashboardState, UiEvent};
pub use dashboard::Dashboard;
pub use logging::{setup_file_logging, setup_logging};
