//! Bridge error types.
//!
//! [`BridgeError`] is the central error type for the library. Validation
//! failures are rejected before anything touches the socket; transport and
//! encoding failures are wrapped from the underlying crates.

/// Errors produced by the bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The scenario path does not end with the `.xosc` suffix.
    #[error("scenario file does not end with .xosc: {0}")]
    InvalidScenarioPath(String),

    /// The panel origin could not be parsed into a scheme and host.
    #[error("invalid panel origin: {0}")]
    InvalidOrigin(String),

    /// WebSocket transport failure (connect, send, or receive).
    #[error("websocket transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    /// An outgoing command could not be serialized to JSON.
    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),
}
