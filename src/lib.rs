//! Appointment Service
//!
//! A small read-only HTTP service exposing a liveness check and a fixed list
//! of appointment records as JSON.

pub mod appointments;
pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use appointments::{Appointment, AppointmentStore};
pub use config::{AppConfig, ConfigError};
pub use routes::create_router;
pub use state::AppState;
