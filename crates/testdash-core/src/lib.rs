//! Core types and traits for the test dashboard.
//!
//! This crate provides the foundational building blocks including:
//! - Log entry types (LogEntry, LogLevel)
//! - The selectable test catalog (TestItem, TestCatalog)
//! - Wire messages and transport events
//! - Core traits for the command channel and test runners

pub mod error;
pub mod message;
pub mod traits;
pub mod types;

pub use error::{RunnerError, TransportError};
pub use message::*;
pub use traits::*;
pub use types::*;
