//! WebSocket transport for the test dashboard.
//!
//! A connection is a single stream owned by the supervisor task and
//! replaced wholesale on every reconnect attempt. The supervisor retries
//! a closed connection on a fixed delay, indefinitely; a transport that
//! cannot even be constructed degrades the caller to standalone mode.

mod client;
mod supervisor;

pub use supervisor::{
    ConnectionHandle, ConnectionState, StandaloneChannel, TransportConfig, TransportSupervisor,
};
