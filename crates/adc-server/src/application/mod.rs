//! Application layer for adc-server.

pub mod echo;

pub use echo::{echo_until_eof, ServerError, ECHO_PREFIX};
