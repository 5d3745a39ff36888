//! ADC stream server entry point.
//!
//! Listens on the given port, accepts one client, prints everything it
//! sends as `Received: <chunk>` on stdout, and exits when the client
//! disconnects.
//!
//! # Usage
//!
//! ```text
//! adc-server <PORT>
//! ```
//!
//! Status messages go to stderr through `tracing` (`RUST_LOG=debug` also
//! logs every decoded reading); stdout carries only the echo.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adc_server::{run_server, ServerConfig};

/// Accepts one ADC stream client and echoes what it sends.
#[derive(Debug, Parser)]
#[command(
    name = "adc-server",
    about = "Accepts one ADC stream client and echoes what it sends",
    version
)]
struct Cli {
    /// TCP port to listen on (all IPv4 interfaces).
    port: u16,
}

impl Cli {
    fn into_server_config(self) -> ServerConfig {
        ServerConfig::on_port(self.port)
    }
}

/// Program entry point.
///
/// Runs on a `current_thread` runtime: bind, accept, and every read are
/// awaited one after another on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_server_config();

    let mut stdout = tokio::io::stdout();
    let summary = run_server(&config, &mut stdout)
        .await
        .with_context(|| format!("serving on port {} failed", config.bind_addr.port()))?;

    info!("ADC server done: {} readings received", summary.readings);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
