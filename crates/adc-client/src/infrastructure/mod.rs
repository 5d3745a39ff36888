//! Infrastructure layer for adc-client.
//!
//! Opens the one TCP connection the client ever makes and hands it to the
//! application loop.

pub mod connection;

pub use connection::{connect, run_client};
