//! The client's sample → format → send → sleep loop.
//!
//! ```text
//! loop:
//!     value = sampler.sample()
//!     write "ADC: <value>\n"
//!     sleep(delay)
//! ```
//!
//! The loop never retries.  The first failed write ends it with
//! [`ClientError::Send`], which the binary turns into a non-zero exit.

use std::net::SocketAddr;
use std::time::Duration;

use adc_core::{encode_reading, AdcReading, AdcSampler};
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time;
use tracing::debug;

/// Errors that can end a client run.
#[derive(Debug, Error)]
pub enum ClientError {
    /// TCP connection to the server failed.
    #[error("failed to connect to server at {addr}: {source}")]
    ConnectFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Writing a reading to the connection failed.
    #[error("send failed after {sent} readings: {source}")]
    Send {
        /// Readings successfully written before the failure.
        sent: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Streams readings from `sampler` into `writer` until a write fails or
/// `max_samples` readings have been sent.
///
/// `delay` is applied *between* readings: the first reading goes out
/// immediately and no pause follows the last one when a limit is set.  With
/// `max_samples = None` the loop only ends on a write error.
///
/// Returns the number of readings written.
///
/// # Errors
///
/// Returns [`ClientError::Send`] on the first write or flush failure.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use adc_client::stream_readings;
/// use adc_core::RandomSampler;
///
/// # tokio_test::block_on(async {
/// let mut out: Vec<u8> = Vec::new();
/// let mut sampler = RandomSampler::with_seed(1);
/// let sent = stream_readings(&mut out, &mut sampler, Duration::ZERO, Some(3))
///     .await
///     .unwrap();
/// assert_eq!(sent, 3);
/// assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 3);
/// # });
/// ```
pub async fn stream_readings<W, S>(
    writer: &mut W,
    sampler: &mut S,
    delay: Duration,
    max_samples: Option<u64>,
) -> Result<u64, ClientError>
where
    W: AsyncWrite + Unpin + ?Sized,
    S: AdcSampler + ?Sized,
{
    let mut sent: u64 = 0;

    loop {
        if max_samples.is_some_and(|max| sent >= max) {
            break;
        }
        if sent > 0 {
            time::sleep(delay).await;
        }

        let reading = AdcReading(sampler.sample());
        let line = encode_reading(reading);

        // Flush per reading so each line leaves promptly even if the caller
        // wrapped the socket in a BufWriter.
        let result = match writer.write_all(line.as_bytes()).await {
            Ok(()) => writer.flush().await,
            Err(e) => Err(e),
        };
        if let Err(source) = result {
            return Err(ClientError::Send { sent, source });
        }

        sent += 1;
        debug!("sent {reading} (#{sent})");
    }

    Ok(sent)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
