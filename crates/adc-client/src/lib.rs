//! adc-client library crate.
//!
//! Connects to an `adc-server` once and streams `ADC: <value>` lines to it
//! until the connection breaks.
//!
//! # Architecture
//!
//! ```text
//! [adc-client]
//!   ├── domain/           ClientConfig (no I/O)
//!   ├── application/      The sample → format → send → sleep loop
//!   └── infrastructure/   TCP connect (tokio)
//! ```
//!
//! The application loop is written against `AsyncWrite` rather than
//! `TcpStream`, so it can be driven by an in-memory buffer in tests.

/// Domain layer: configuration types.
pub mod domain;

/// Application layer: the streaming loop.
pub mod application;

/// Infrastructure layer: the TCP connection to the server.
pub mod infrastructure;

pub use application::stream_readings::{stream_readings, ClientError};
pub use domain::ClientConfig;
pub use infrastructure::connection::{connect, run_client};
