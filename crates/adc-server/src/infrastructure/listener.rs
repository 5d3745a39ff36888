//! Listening socket for the single-client server.
//!
//! The server's whole connection lifecycle is:
//!
//! ```text
//! not connected ──accept──▶ connected ──EOF──▶ closed
//! ```
//!
//! The listener is dropped as soon as the one client is accepted, so later
//! connection attempts are refused by the OS rather than queued.

use std::net::SocketAddr;

use tokio::io::AsyncWrite;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::application::echo::{echo_until_eof, ServerError};
use crate::domain::config::ServerConfig;
use crate::domain::summary::EchoSummary;

/// Creates a socket, binds it to `config.bind_addr`, and starts listening
/// with `config.backlog`.
///
/// `TcpListener::bind` would pick its own backlog, so the socket is built
/// step by step with [`TcpSocket`] instead.  Must be called from within a
/// Tokio runtime.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if any of socket creation, `bind()`, or
/// `listen()` fails (port in use, insufficient permission).
pub fn bind_listener(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_addr;
    let bind_err = |source: std::io::Error| ServerError::Bind { addr, source };

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .map_err(bind_err)?;

    socket.bind(addr).map_err(bind_err)?;
    socket.listen(config.backlog).map_err(bind_err)
}

/// Accepts exactly one client on `listener`, closes the listener, and echoes
/// the client's stream to `out` until it disconnects.
///
/// # Errors
///
/// Returns [`ServerError::Accept`] if the accept fails, otherwise whatever
/// [`echo_until_eof`] returns.
pub async fn serve_one<W>(
    listener: TcpListener,
    out: &mut W,
    chunk_size: usize,
) -> Result<(EchoSummary, SocketAddr), ServerError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let (mut stream, peer_addr) = listener.accept().await.map_err(ServerError::Accept)?;
    drop(listener);
    info!("Client connected from {peer_addr}");

    let summary = echo_until_eof(&mut stream, out, chunk_size).await?;

    info!(
        "client {peer_addr} disconnected: {} bytes in {} chunks, {} readings, {} malformed",
        summary.bytes, summary.chunks, summary.readings, summary.malformed
    );
    Ok((summary, peer_addr))
}

/// Binds per `config`, then serves a single client to completion.
///
/// # Errors
///
/// See [`bind_listener`] and [`serve_one`].
pub async fn run_server<W>(config: &ServerConfig, out: &mut W) -> Result<EchoSummary, ServerError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let listener = bind_listener(config)?;
    info!("Server listening on port {}...", config.bind_addr.port());

    let (summary, _) = serve_one(listener, out, config.chunk_size).await?;
    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
