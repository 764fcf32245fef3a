//! Relay service HTTP layer.
//!
//! Exposed as a library so integration tests can rebuild the production
//! router and middleware stack without spawning the binary.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
