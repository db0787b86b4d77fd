//! Bridge configuration and endpoint selection.
//!
//! Follows 12-factor style: settings come from environment variables (or a
//! `.env` file via `dotenvy`). The WebSocket ports are fixed by the scenario
//! server and are not configurable from this layer.

use crate::error::BridgeError;

/// Port the scenario server listens on for TLS (`wss`) connections.
pub const SECURE_PORT: u16 = 8082;

/// Port the scenario server listens on for plain (`ws`) connections.
pub const PLAIN_PORT: u16 = 8081;

/// Top-level bridge configuration.
///
/// Loaded once at startup via [`BridgeConfig::from_env`].
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Origin the control panel is served from, e.g. `https://panel.local`.
    /// The origin's scheme and host determine the WebSocket endpoint.
    pub panel_origin: String,
}

impl BridgeConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads `PANEL_ORIGIN`, falling back to `http://localhost`. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let panel_origin =
            std::env::var("PANEL_ORIGIN").unwrap_or_else(|_| "http://localhost".to_string());

        Self { panel_origin }
    }
}

/// Derives the scenario server endpoint from the panel origin.
///
/// A TLS origin (`https`) maps to `wss://<host>:8082`; any other origin
/// maps to `ws://<host>:8081`. Ports are fixed by the server.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidOrigin`] when the origin has no
/// `scheme://host` shape or an empty scheme or host.
pub fn server_endpoint(origin: &str) -> Result<String, BridgeError> {
    let (scheme, rest) = origin
        .split_once("://")
        .ok_or_else(|| BridgeError::InvalidOrigin(origin.to_string()))?;

    // Strip any port or path the caller left on the origin.
    let host = rest
        .split(['/', ':'])
        .next()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| BridgeError::InvalidOrigin(origin.to_string()))?;

    if scheme.is_empty() {
        return Err(BridgeError::InvalidOrigin(origin.to_string()));
    }

    if scheme == "https" {
        Ok(format!("wss://{host}:{SECURE_PORT}"))
    } else {
        Ok(format!("ws://{host}:{PLAIN_PORT}"))
    }
}
