//! Application layer for adc-client.
//!
//! Holds the streaming loop.  It depends on `adc-core` for sampling and
//! formatting and on tokio only for the `AsyncWrite` trait and the timer.

pub mod stream_readings;

pub use stream_readings::{stream_readings, ClientError};
