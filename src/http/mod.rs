//! HTTP server module.
//!
//! The server binds plain HTTP on the configured address and shuts down
//! gracefully on SIGTERM/SIGINT, draining in-flight requests first.

mod server;
mod shutdown;

pub use server::{bind_address, start_server, ServerError};
