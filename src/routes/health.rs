//! `GET /health`: reports service identity for orchestrators and monitors.
//!
//! Answering at all is the signal; there are no dependencies to check.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_STATUS_OK, SERVICE_NAME};

/// Body of the health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Always `200 {"status":"OK","service":"Appointment Service"}`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS_OK,
        service: SERVICE_NAME,
    })
}
