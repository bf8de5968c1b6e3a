//! Appointment records and the in-memory snapshot that serves them.
//!
//! The snapshot is built once at startup and shared through an `Arc`; nothing
//! mutates it afterwards, so handlers read it without locking.

use std::sync::Arc;

use serde::Serialize;

/// A scheduling record linking a patient, a date/time and a doctor.
///
/// `date` (`YYYY-MM-DD`) and `time` (`HH:MM`) are stored as given and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
}

impl Appointment {
    pub fn new(id: &str, patient_id: &str, date: &str, time: &str, doctor: &str) -> Self {
        Self {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            doctor: doctor.to_string(),
        }
    }
}

/// Read-only appointment collection. Clones share the same records.
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    records: Arc<[Appointment]>,
}

impl AppointmentStore {
    pub fn new(records: Vec<Appointment>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The records every process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Appointment::new("1", "1", "2023-06-15", "10:00", "Dr. Smith"),
            Appointment::new("2", "2", "2023-06-16", "14:30", "Dr. Johnson"),
        ])
    }

    pub fn all(&self) -> &[Appointment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
