//! Domain layer for adc-client.
//!
//! Plain data only: nothing here touches a socket, the clock, or the
//! environment.

pub mod config;

pub use config::ClientConfig;
