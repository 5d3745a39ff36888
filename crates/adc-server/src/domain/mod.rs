//! Domain layer for adc-server.

pub mod config;
pub mod summary;

pub use config::ServerConfig;
pub use summary::EchoSummary;
