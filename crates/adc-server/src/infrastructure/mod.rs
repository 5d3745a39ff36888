//! Infrastructure layer for adc-server.
//!
//! Owns the listening socket: bind, listen with a backlog of one, accept a
//! single client, and close the listener so no second client gets in.

pub mod listener;

pub use listener::{bind_listener, run_server, serve_one};
