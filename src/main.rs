//! scenario-bridge entry point.
//!
//! Forwards one scenario file path to the scenario server and reports the
//! server's verdict. Single outstanding request: the process exits once the
//! response arrives or the connection is lost.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scenario_bridge::config::{BridgeConfig, server_endpoint};
use scenario_bridge::scenario::send_scenario_param;
use scenario_bridge::status::StatusLine;
use scenario_bridge::ws::connection::Connection;
use scenario_bridge::ws::dispatch::dispatch;

/// Forward a scenario file path to the scenario server over WebSocket.
#[derive(Debug, Parser)]
#[command(name = "scenario-bridge", version, about)]
struct Cli {
    /// Path of the scenario file to execute (must end in `.xosc`).
    scenario_path: String,

    /// Panel origin override, e.g. `https://panel.local`.
    /// Defaults to the `PANEL_ORIGIN` environment variable.
    #[arg(long)]
    origin: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = BridgeConfig::from_env();
    let origin = cli.origin.unwrap_or(config.panel_origin);
    let endpoint = server_endpoint(&origin)?;
    tracing::info!(%endpoint, "starting scenario-bridge");

    let mut connection = Connection::open(&endpoint).await?;
    send_scenario_param(&mut connection, &cli.scenario_path).await?;

    // Wait for the scenario-parameter response, ignoring anything else.
    let mut status = StatusLine::new();
    while status.last().is_none() {
        match connection.next_response().await? {
            Some(response) => dispatch(response, &mut status),
            None => anyhow::bail!("connection lost before the server responded"),
        }
    }

    tracing::info!(status = status.text(), "done");
    if status.last() == Some(false) {
        anyhow::bail!("server rejected the scenario parameter");
    }

    Ok(())
}
