//! Core data types for the test dashboard.

mod log;
mod test;

pub use log::{wall_clock_time, LogEntry, LogLevel};
pub use test::{TestCatalog, TestItem};
