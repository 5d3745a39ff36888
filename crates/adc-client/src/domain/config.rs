//! Client configuration types.
//!
//! [`ClientConfig`] is built once in `main.rs` from the parsed command line
//! and then handed to [`crate::run_client`].  Keeping it a plain struct means
//! tests can construct one directly without going through clap.

use std::net::SocketAddr;
use std::time::Duration;

/// All runtime configuration for the client.
///
/// # Example
///
/// ```rust
/// use adc_client::ClientConfig;
///
/// let cfg = ClientConfig::default();
/// assert_eq!(cfg.server_addr.port(), 5000);
/// assert!(cfg.max_samples.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Address of the server to connect to.
    pub server_addr: SocketAddr,

    /// Pause after each sample is sent.
    pub delay: Duration,

    /// Stop after this many samples.  `None` streams until the connection
    /// fails or the process is killed.
    pub max_samples: Option<u64>,

    /// Fixed sampler seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    /// | Field        | Default          |
    /// |--------------|------------------|
    /// | server_addr  | `127.0.0.1:5000` |
    /// | delay        | 100 ms           |
    /// | max_samples  | unlimited        |
    /// | seed         | entropy          |
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            delay: Duration::from_millis(100),
            max_samples: None,
            seed: None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
