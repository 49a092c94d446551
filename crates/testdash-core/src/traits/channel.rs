//! Command channel trait definition.

use crate::error::TransportError;
use crate::message::ClientCommand;
use async_trait::async_trait;

/// Trait for the outbound half of the server connection.
///
/// The controller only needs two things from the transport: whether the
/// connection is currently open, and a fire-and-forget send. The live
/// WebSocket handle and the standalone no-op both implement this.
#[async_trait]
pub trait CommandChannel: Send + Sync {
    /// Whether the connection is currently open.
    fn is_open(&self) -> bool;

    /// Enqueue a command for delivery. No acknowledgement is awaited.
    async fn send(&self, command: ClientCommand) -> Result<(), TransportError>;
}
