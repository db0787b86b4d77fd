//! # scenario-bridge
//!
//! WebSocket bridge between the control-panel front end and the local
//! scenario-execution server.
//!
//! The bridge opens one connection per run, forwards a scenario file path
//! as a `{msg_type, value}` JSON envelope, and surfaces the server's
//! response to a status sink. Scenario execution itself happens elsewhere —
//! this crate is a thin forwarding layer.
//!
//! ## Architecture
//!
//! ```text
//! Control panel (CLI)
//!     │
//!     ├── Scenario parameter validation (scenario/)
//!     │
//!     ├── Connection manager (ws/connection)
//!     ├── Command / response envelopes (ws/messages)
//!     ├── Response dispatch (ws/dispatch)
//!     │
//!     └── Scenario server (ws://host:8081 or wss://host:8082)
//! ```

pub mod config;
pub mod error;
pub mod scenario;
pub mod status;
pub mod ws;
