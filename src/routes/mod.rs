//! HTTP route handlers.
//!
//! Both endpoints are read-only JSON. Unmatched paths fall through to axum's
//! default 404 and wrong methods to its default 405.
//! Every response, routed or not, carries an `x-request-id` header.

pub mod appointments;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_APPOINTMENTS;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Appointment list - the snapshot is immutable for the process lifetime
    let appointment_routes = Router::new()
        .route("/appointments", get(appointments::list))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_APPOINTMENTS),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(appointment_routes)
        .merge(health_routes)
        .with_state(state)
        // Outermost, so 404/405 responses are tagged too
        .layer(middleware::from_fn(request_id_layer))
}
