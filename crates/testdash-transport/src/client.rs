//! Single WebSocket connection: connect and pump.

use futures::{SinkExt, StreamExt};
use testdash_core::error::TransportError;
use testdash_core::message::{ClientCommand, ServerMessage, TransportEvent};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// One connection attempt.
pub async fn connect(url: &str) -> Result<WsStream, TransportError> {
    let (stream, _response) = connect_async(url)
        .await
        .map_err(|e| TransportError::Connection(e.to_string()))?;
    Ok(stream)
}

/// Drive a connected stream until it terminates.
///
/// Inbound text frames are parsed as [`ServerMessage`] and forwarded;
/// frames that fail to parse are logged and skipped without tearing the
/// connection down. Outbound commands are written as they arrive.
pub async fn pump(
    stream: WsStream,
    events: &mpsc::UnboundedSender<TransportEvent>,
    outbound: &mut mpsc::UnboundedReceiver<ClientCommand>,
) {
    let (mut sink, mut source) = stream.split();

    loop {
        tokio::select! {
            inbound = source.next() => match inbound {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ServerMessage>(&text) {
                    Ok(message) => {
                        if events.send(TransportEvent::Message(message)).is_err() {
                            return;
                        }
                    }
                    Err(e) => debug!("Discarding unparseable server message: {}", e),
                },
                Some(Ok(Message::Close(_))) | None => return,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    let _ = events.send(TransportEvent::Error(e.to_string()));
                    return;
                }
            },
            command = outbound.recv() => match command {
                Some(command) => {
                    let json = match serde_json::to_string(&command) {
                        Ok(json) => json,
                        Err(e) => {
                            warn!("Failed to serialize command: {}", e);
                            continue;
                        }
                    };
                    if let Err(e) = sink.send(Message::Text(json)).await {
                        let _ = events.send(TransportEvent::Error(e.to_string()));
                        return;
                    }
                }
                // Handle dropped; nothing left to send on this connection.
                None => return,
            },
        }
    }
}
