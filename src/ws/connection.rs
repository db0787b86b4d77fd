//! WebSocket connection manager.
//!
//! [`Connection`] owns the single active socket for the bridge's lifetime.
//! There is no pooling and no reconnect: when the connection is lost the
//! caller decides what to do.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::messages::{ClientCommand, ServerResponse};
use crate::error::BridgeError;

/// One active WebSocket connection to the scenario server.
#[derive(Debug)]
pub struct Connection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Connection {
    /// Opens a connection to the given endpoint (`ws://...` or `wss://...`).
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] when the server is unreachable or
    /// the WebSocket handshake fails.
    pub async fn open(endpoint: &str) -> Result<Self, BridgeError> {
        let (stream, _) = connect_async(endpoint).await?;
        tracing::info!(endpoint, "connection opened");
        Ok(Self { stream })
    }

    /// Serializes the command and sends it as a single text frame.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Encode`] when serialization fails and
    /// [`BridgeError::Transport`] when the write fails.
    pub async fn send(&mut self, command: &ClientCommand) -> Result<(), BridgeError> {
        let json = serde_json::to_string(command)?;
        self.stream.send(Message::text(json)).await?;
        Ok(())
    }

    /// Waits for the next response from the server.
    ///
    /// Malformed text frames are logged and skipped so a single bad frame
    /// cannot wedge the stream; non-text frames are ignored. Returns
    /// `Ok(None)` once the server closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] when the read fails.
    pub async fn next_response(&mut self) -> Result<Option<ServerResponse>, BridgeError> {
        while let Some(frame) = self.stream.next().await {
            match frame? {
                Message::Text(text) => match serde_json::from_str::<ServerResponse>(&text) {
                    Ok(response) => return Ok(Some(response)),
                    Err(err) => tracing::warn!(%err, "dropping malformed frame"),
                },
                Message::Close(_) => break,
                _ => {}
            }
        }
        tracing::info!("connection lost");
        Ok(None)
    }
}
