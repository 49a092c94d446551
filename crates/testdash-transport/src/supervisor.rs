//! Connection supervision and the reconnect loop.

use std::time::Duration;

use async_trait::async_trait;
use testdash_core::error::TransportError;
use testdash_core::message::{ClientCommand, TransportEvent};
use testdash_core::traits::CommandChannel;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tracing::{debug, info};

use crate::client;

/// Connection lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Transport settings.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub url: String,
    pub reconnect_delay: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            url: "ws://localhost:8080".to_string(),
            reconnect_delay: Duration::from_secs(5),
        }
    }
}

/// Supervises the server connection.
///
/// One supervising task owns the stream and replaces it on every
/// reconnect attempt. A closed or refused connection is retried on a
/// fixed delay with no backoff and no attempt cap; only a transport that
/// cannot be constructed at all ([`TransportSupervisor::spawn`] returning
/// an error) gives up.
pub struct TransportSupervisor;

impl TransportSupervisor {
    /// Validate the endpoint and spawn the supervising task.
    ///
    /// Returns the handle the controller sends commands through. An
    /// endpoint that cannot form a client request fails here, before any
    /// task is spawned; the caller is expected to fall back to
    /// [`StandaloneChannel`].
    pub fn spawn(
        config: TransportConfig,
        events: mpsc::UnboundedSender<TransportEvent>,
    ) -> Result<ConnectionHandle, TransportError> {
        config
            .url
            .as_str()
            .into_client_request()
            .map_err(|e| TransportError::InvalidEndpoint(e.to_string()))?;

        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);

        tokio::spawn(run_loop(config, events, outbound_rx, state_tx));

        Ok(ConnectionHandle {
            state: state_rx,
            outbound: outbound_tx,
        })
    }
}

async fn run_loop(
    config: TransportConfig,
    events: mpsc::UnboundedSender<TransportEvent>,
    mut outbound: mpsc::UnboundedReceiver<ClientCommand>,
    state: watch::Sender<ConnectionState>,
) {
    loop {
        let _ = state.send(ConnectionState::Connecting);

        match client::connect(&config.url).await {
            Ok(stream) => {
                info!("Connected to {}", config.url);
                let _ = state.send(ConnectionState::Connected);
                if events.send(TransportEvent::Opened).is_err() {
                    return;
                }
                client::pump(stream, &events, &mut outbound).await;
            }
            Err(e) => {
                debug!("Connection attempt failed: {}", e);
                if events.send(TransportEvent::Error(e.to_string())).is_err() {
                    return;
                }
            }
        }

        let _ = state.send(ConnectionState::Disconnected);

        // Commands queued against the dead connection are not replayed.
        while outbound.try_recv().is_ok() {}

        if events.send(TransportEvent::Closed).is_err() {
            return;
        }
        tokio::time::sleep(config.reconnect_delay).await;
    }
}

/// Sending half of the connection, handed to the controller.
#[derive(Clone)]
pub struct ConnectionHandle {
    state: watch::Receiver<ConnectionState>,
    outbound: mpsc::UnboundedSender<ClientCommand>,
}

impl ConnectionHandle {
    /// Current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }
}

#[async_trait]
impl CommandChannel for ConnectionHandle {
    fn is_open(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    async fn send(&self, command: ClientCommand) -> Result<(), TransportError> {
        if !self.is_open() {
            return Err(TransportError::NotConnected);
        }
        self.outbound
            .send(command)
            .map_err(|e| TransportError::Send(e.to_string()))
    }
}

/// Degraded mode with no live transport: permanently closed, never
/// retried. Locally simulated runs are unaffected.
pub struct StandaloneChannel;

#[async_trait]
impl CommandChannel for StandaloneChannel {
    fn is_open(&self) -> bool {
        false
    }

    async fn send(&self, _command: ClientCommand) -> Result<(), TransportError> {
        Err(TransportError::NotConnected)
    }
}
