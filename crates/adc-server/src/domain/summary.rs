//! What the server saw during one session.

/// Counters collected while echoing one client's stream.
///
/// `bytes` and `chunks` describe the raw transfer.  `readings` and
/// `malformed` come from decoding the same bytes as `ADC: <value>` lines; they
/// never affect what is echoed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoSummary {
    /// Total bytes received.
    pub bytes: u64,
    /// Number of non-empty reads.
    pub chunks: u64,
    /// Lines that parsed as readings.
    pub readings: u64,
    /// Lines that did not parse, including a cut-off final line.
    pub malformed: u64,
}
