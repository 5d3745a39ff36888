//! ADC stream client entry point.
//!
//! Connects to an `adc-server`, then samples the simulated converter, sends
//! one `ADC: <value>` line, and sleeps, over and over until a send fails.
//!
//! # Usage
//!
//! ```text
//! adc-client <PORT> <SERVER_IP> <DELAY_MS> [OPTIONS]
//!
//! Options:
//!   --count <N>   Stop after N readings          [env: ADC_COUNT]
//!   --seed  <S>   Fixed sampler seed             [env: ADC_SEED]
//! ```
//!
//! `DELAY_MS` may be fractional (`0.5` waits half a millisecond).
//!
//! Wrong argument counts or unparsable values are rejected by clap with a
//! usage message and exit status 2 before any socket is opened.  Any socket
//! failure afterwards exits with status 1.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adc_client::{run_client, ClientConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Streams synthetic ADC readings to a TCP server.
#[derive(Debug, Parser)]
#[command(
    name = "adc-client",
    about = "Streams synthetic ADC readings to a TCP server",
    version
)]
struct Cli {
    /// Server TCP port.
    port: u16,

    /// Server IPv4 or IPv6 address.
    server_ip: IpAddr,

    /// Pause between readings, in milliseconds (fractions allowed).
    #[arg(value_parser = parse_delay_ms)]
    delay_ms: Duration,

    /// Stop after this many readings instead of streaming forever.
    #[arg(long, env = "ADC_COUNT")]
    count: Option<u64>,

    /// Seed the sampler for a reproducible sequence.
    #[arg(long, env = "ADC_SEED")]
    seed: Option<u64>,
}

impl Cli {
    /// Converts the parsed arguments into a [`ClientConfig`].
    fn into_client_config(self) -> ClientConfig {
        ClientConfig {
            server_addr: SocketAddr::new(self.server_ip, self.port),
            delay: self.delay_ms,
            max_samples: self.count,
            seed: self.seed,
        }
    }
}

/// Accepts a non-negative number of milliseconds that fits in a [`Duration`].
fn parse_delay_ms(s: &str) -> Result<Duration, String> {
    let ms: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of milliseconds"))?;
    Duration::try_from_secs_f64(ms / 1000.0).map_err(|_| {
        format!("delay must be a non-negative, in-range number of milliseconds, got {s}")
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// A `current_thread` runtime keeps the client single-threaded: every socket
/// call and sleep is awaited in sequence.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_client_config();

    info!(
        "ADC client starting: server={}, delay={:?}",
        config.server_addr, config.delay
    );

    let sent = run_client(&config)
        .await
        .with_context(|| format!("streaming to {} failed", config.server_addr))?;

    info!("ADC client finished after {sent} readings");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_three_positionals() {
        let cli = Cli::parse_from(["adc-client", "5000", "192.168.1.10", "250"]);
        assert_eq!(cli.port, 5000);
        assert_eq!(cli.server_ip.to_string(), "192.168.1.10");
        assert_eq!(cli.delay_ms, Duration::from_millis(250));
        assert_eq!(cli.count, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_fractional_delay_becomes_sub_millisecond_duration() {
        let config = Cli::parse_from(["adc-client", "5000", "127.0.0.1", "0.5"])
            .into_client_config();
        assert_eq!(config.delay, Duration::from_micros(500));
    }

    #[test]
    fn test_config_combines_ip_and_port() {
        let config = Cli::parse_from(["adc-client", "9000", "10.0.0.5", "1"])
            .into_client_config();
        assert_eq!(config.server_addr.to_string(), "10.0.0.5:9000");
    }

    #[test]
    fn test_ipv6_server_address() {
        let config = Cli::parse_from(["adc-client", "9000", "::1", "1"]).into_client_config();
        assert_eq!(config.server_addr.to_string(), "[::1]:9000");
    }

    #[test]
    fn test_count_and_seed_options() {
        let config = Cli::parse_from([
            "adc-client", "5000", "127.0.0.1", "10", "--count", "20", "--seed", "3",
        ])
        .into_client_config();
        assert_eq!(config.max_samples, Some(20));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_missing_arguments_exit_non_zero() {
        let err = Cli::try_parse_from(["adc-client", "5000", "127.0.0.1"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_no_arguments_exit_non_zero() {
        let err = Cli::try_parse_from(["adc-client"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_extra_argument_exits_non_zero() {
        let err = Cli::try_parse_from(["adc-client", "5000", "127.0.0.1", "10", "extra"])
            .unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_invalid_ip_is_rejected() {
        assert!(Cli::try_parse_from(["adc-client", "5000", "not.an.ip", "10"]).is_err());
    }

    #[test]
    fn test_port_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["adc-client", "70000", "127.0.0.1", "10"]).is_err());
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        assert!(parse_delay_ms("-1").is_err());
    }

    #[test]
    fn test_non_finite_delay_is_rejected() {
        assert!(parse_delay_ms("inf").is_err());
        assert!(parse_delay_ms("NaN").is_err());
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        assert_eq!(parse_delay_ms("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn test_delay_too_large_for_duration_is_rejected() {
        assert!(parse_delay_ms("1e300").is_err());
    }

    #[test]
    fn test_huge_delay_argument_exits_with_usage_error() {
        let err = Cli::try_parse_from(["adc-client", "5000", "127.0.0.1", "1e300"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
