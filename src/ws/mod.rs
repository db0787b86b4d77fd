//! WebSocket layer: connection management, message envelopes, and
//! response dispatch.

pub mod connection;
pub mod dispatch;
pub mod messages;
