//! TCP connection to the ADC server.
//!
//! The client connects exactly once.  There is no reconnect loop: if the
//! server is not listening, or the connection later breaks, the run is over.

use std::net::SocketAddr;

use adc_core::{AdcSampler, RandomSampler};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::application::stream_readings::{stream_readings, ClientError};
use crate::domain::config::ClientConfig;

/// Opens the TCP connection to `addr`.
///
/// Nagle's algorithm is disabled so that each short reading line is
/// transmitted as soon as it is written instead of being held back to
/// coalesce with the next one.
///
/// # Errors
///
/// Returns [`ClientError::ConnectFailed`] if the handshake fails (nothing
/// listening, host unreachable, connection refused).
pub async fn connect(addr: SocketAddr) -> Result<TcpStream, ClientError> {
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| ClientError::ConnectFailed { addr, source })?;

    if let Err(e) = stream.set_nodelay(true) {
        warn!("could not disable Nagle on connection to {addr}: {e}");
    }

    Ok(stream)
}

/// Connects to the configured server and streams readings until the
/// connection fails or `config.max_samples` is reached.
///
/// Returns the number of readings sent.
///
/// # Errors
///
/// Returns [`ClientError::ConnectFailed`] if the initial connect fails and
/// [`ClientError::Send`] if a later write fails.
pub async fn run_client(config: &ClientConfig) -> Result<u64, ClientError> {
    let mut stream = connect(config.server_addr).await?;
    info!("Connected to {}", config.server_addr);

    let mut sampler: Box<dyn AdcSampler + Send> = match config.seed {
        Some(seed) => Box::new(RandomSampler::with_seed(seed)),
        None => Box::new(RandomSampler::from_entropy()),
    };

    let sent = stream_readings(
        &mut stream,
        sampler.as_mut(),
        config.delay,
        config.max_samples,
    )
    .await?;

    info!("sent {sent} readings; closing connection");
    Ok(sent)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
