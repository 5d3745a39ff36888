//! adc-server library crate.
//!
//! Accepts a single TCP client, prints every chunk it sends to an output
//! stream, and returns once the client closes the connection.
//!
//! # Architecture
//!
//! ```text
//! [adc-server]
//!   ├── domain/           ServerConfig, EchoSummary (no I/O)
//!   ├── application/      Read-until-EOF echo loop
//!   └── infrastructure/   Bind with backlog 1, accept one client (tokio)
//! ```

/// Domain layer: configuration and result types.
pub mod domain;

/// Application layer: the echo loop.
pub mod application;

/// Infrastructure layer: the listening socket.
pub mod infrastructure;

pub use application::echo::{echo_until_eof, ServerError, ECHO_PREFIX};
pub use domain::{EchoSummary, ServerConfig};
pub use infrastructure::listener::{bind_listener, run_server, serve_one};
