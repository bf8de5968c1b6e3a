//! State handed to every request handler.

use crate::appointments::AppointmentStore;

/// Cheap to clone: the appointment snapshot is shared, not copied.
#[derive(Clone)]
pub struct AppState {
    pub appointments: AppointmentStore,
}

impl AppState {
    pub fn new(appointments: AppointmentStore) -> Self {
        Self { appointments }
    }
}
