//! # adc-core
//!
//! Shared library for the ADC stream client and server containing the text
//! wire format and the synthetic sample source.
//!
//! This crate has no dependency on sockets or an async runtime; both binaries
//! pull it in and do their own I/O.
//!
//! # Architecture overview
//!
//! The client simulates an analog-to-digital converter by drawing
//! pseudo-random integers and ships each one to the server as a line of text.
//! The server prints whatever arrives.
//!
//! - **`protocol`** – How readings travel over the network.  Each reading is
//!   a single ASCII line `ADC: <value>\n`; there is no header, length prefix,
//!   or version byte.  The [`LineDecoder`] reassembles lines from the
//!   arbitrary chunks a TCP read returns.
//!
//! - **`sampler`** – Where readings come from.  [`AdcSampler`] is the seam;
//!   [`RandomSampler`] is the 10-bit pseudo-random implementation.

pub mod protocol;
pub mod sampler;

pub use protocol::decoder::{LineDecoder, MAX_LINE_LEN};
pub use protocol::line::{encode_reading, parse_line, AdcReading, FrameError, LINE_PREFIX};
pub use sampler::{AdcSampler, RandomSampler, ADC_RESOLUTION};
