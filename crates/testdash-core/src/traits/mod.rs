//! Core traits for the test dashboard.

mod channel;
mod runner;

pub use channel::CommandChannel;
pub use runner::TestRunner;
