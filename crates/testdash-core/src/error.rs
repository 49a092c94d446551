//! Error types for the test dashboard.

use thiserror::Error;

/// Transport-specific errors.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The endpoint could not even form a client request. This is the
    /// construction-failure path: the caller degrades to standalone mode
    /// instead of entering the retry loop.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Send failed: {0}")]
    Send(String),

    #[error("Not connected")]
    NotConnected,
}

/// Runner-specific errors.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Log channel closed")]
    ChannelClosed,
}
