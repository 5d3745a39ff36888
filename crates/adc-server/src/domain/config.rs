//! Server configuration types.

use std::net::SocketAddr;

/// All runtime configuration for the server.
///
/// # Example
///
/// ```rust
/// use adc_server::ServerConfig;
///
/// let cfg = ServerConfig::on_port(7000);
/// assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:7000");
/// assert_eq!(cfg.backlog, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.  The binary always uses every IPv4
    /// interface (`0.0.0.0`) with the port from the command line.
    pub bind_addr: SocketAddr,

    /// Pending-connection queue length passed to `listen()`.
    pub backlog: u32,

    /// Largest chunk read from the client in one call.
    pub chunk_size: usize,
}

impl ServerConfig {
    /// Configuration listening on all IPv4 interfaces at `port`.
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    /// | Field      | Default        |
    /// |------------|----------------|
    /// | bind_addr  | `0.0.0.0:5000` |
    /// | backlog    | 1              |
    /// | chunk_size | 1024 bytes     |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            backlog: 1,
            chunk_size: 1024,
        }
    }
}
