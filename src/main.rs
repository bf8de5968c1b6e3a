//! Appointment Service entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, builds
//! the appointment snapshot and router, and runs the HTTP server until a
//! shutdown signal arrives.

use clap::Parser;

use appointment_service::config::AppConfig;
use appointment_service::{create_router, http, logging, AppState, AppointmentStore};

/// Appointment Service: read-only appointment records over HTTP
#[derive(Parser, Debug)]
#[command(name = "appointment-service", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "appointment_service=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first so the log format is known
    let config = AppConfig::resolve(args.config.as_deref())?;

    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, config.logging.log_format());

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let appointments = AppointmentStore::seeded();
    tracing::info!(count = appointments.len(), "Initialized appointment snapshot");

    let app = create_router(AppState::new(appointments));

    http::start_server(app, &config.http).await?;

    Ok(())
}
