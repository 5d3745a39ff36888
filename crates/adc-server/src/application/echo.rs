//! Read-until-EOF echo loop.
//!
//! Every chunk the client sends is written to the output stream verbatim,
//! preceded by [`ECHO_PREFIX`].  Chunk boundaries are whatever the OS hands
//! back from `read()`, so a prefix can land in the middle of a reading line;
//! the output is a transcript of reads, not of lines.
//!
//! The same bytes are run through [`LineDecoder`] on the side so each
//! reading is logged.  Decoding problems are logged and counted but never
//! stop the echo.

use std::net::SocketAddr;

use adc_core::{parse_line, LineDecoder};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::domain::summary::EchoSummary;

/// Text written before each echoed chunk.
pub const ECHO_PREFIX: &[u8] = b"Received: ";

/// Errors that can end a server run.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Creating, binding, or listening on the socket failed.
    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Accepting the client connection failed.
    #[error("accept failed: {0}")]
    Accept(#[source] std::io::Error),

    /// Reading from the client failed.
    #[error("read from client failed: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the echo to the output stream failed.
    #[error("writing echo output failed: {0}")]
    Output(#[source] std::io::Error),
}

/// Copies `reader` to `out` chunk by chunk until `reader` reaches EOF.
///
/// Each read of at most `chunk_size` bytes is written as
/// `Received: <chunk>` and flushed immediately.
///
/// # Errors
///
/// Returns [`ServerError::Read`] if a read fails and
/// [`ServerError::Output`] if writing the echo fails.
///
/// # Example
///
/// ```rust
/// use adc_server::echo_until_eof;
///
/// # tokio_test::block_on(async {
/// let mut input: &[u8] = b"ADC: 5\n";
/// let mut out: Vec<u8> = Vec::new();
/// let summary = echo_until_eof(&mut input, &mut out, 1024).await.unwrap();
/// assert_eq!(out, b"Received: ADC: 5\n");
/// assert_eq!(summary.readings, 1);
/// # });
/// ```
pub async fn echo_until_eof<R, W>(
    reader: &mut R,
    out: &mut W,
    chunk_size: usize,
) -> Result<EchoSummary, ServerError>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut decoder = LineDecoder::new();
    let mut summary = EchoSummary::default();

    loop {
        let n = reader.read(&mut buf).await.map_err(ServerError::Read)?;
        if n == 0 {
            debug!("client closed the connection (EOF)");
            break;
        }
        let chunk = &buf[..n];
        summary.bytes += n as u64;
        summary.chunks += 1;

        out.write_all(ECHO_PREFIX)
            .await
            .map_err(ServerError::Output)?;
        out.write_all(chunk).await.map_err(ServerError::Output)?;
        out.flush().await.map_err(ServerError::Output)?;

        decoder.push(chunk);
        while let Some(next) = decoder.next_line() {
            match next {
                Ok(line) => tally_line(&line, &mut summary),
                Err(e) => {
                    summary.malformed += 1;
                    warn!("dropping line: {e}");
                }
            }
        }
    }

    if let Some(tail) = decoder.finish() {
        warn!("stream ended mid-line ({} bytes without newline)", tail.len());
        tally_line(&tail, &mut summary);
    }

    Ok(summary)
}

fn tally_line(line: &[u8], summary: &mut EchoSummary) {
    match parse_line(line) {
        Ok(reading) => {
            summary.readings += 1;
            debug!("reading {}", reading.value());
        }
        Err(e) => {
            summary.malformed += 1;
            warn!("malformed line: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
