//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::HttpServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Socket address the server listens on.
pub fn bind_address(config: &HttpServerConfig) -> Result<SocketAddr, ServerError> {
    format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::InvalidAddress(format!("{}:{} ({})", config.host, config.port, e)))
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = bind_address(config)?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone());
    spawn_listening_notice(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Print the startup confirmation once the socket is actually bound.
///
/// The line goes straight to stdout so log filters cannot hide it.
fn spawn_listening_notice(handle: Handle) {
    tokio::spawn(async move {
        if let Some(addr) = handle.listening().await {
            println!("{}", listening_message(addr));
            tracing::debug!(%addr, "Listener bound");
        }
    });
}

fn listening_message(addr: SocketAddr) -> String {
    format!("Appointment service listening at http://{}", addr)
}
