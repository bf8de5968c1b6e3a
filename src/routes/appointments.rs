//! Appointment list endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::appointments::Appointment;
use crate::config::APPOINTMENTS_RETRIEVED_MESSAGE;
use crate::state::AppState;

/// Body of the appointment list response. `count` always equals `appointments.len()`.
#[derive(Debug, Serialize)]
pub struct AppointmentsResponse<'a> {
    pub message: &'static str,
    pub count: usize,
    pub appointments: &'a [Appointment],
}

impl<'a> AppointmentsResponse<'a> {
    pub fn new(appointments: &'a [Appointment]) -> Self {
        Self {
            message: APPOINTMENTS_RETRIEVED_MESSAGE,
            count: appointments.len(),
            appointments,
        }
    }
}

/// Returns every appointment in the snapshot. Query parameters are ignored.
pub async fn list(State(state): State<AppState>) -> Response {
    let records = state.appointments.all();
    tracing::debug!(count = records.len(), "Listing appointments");

    Json(AppointmentsResponse::new(records)).into_response()
}
