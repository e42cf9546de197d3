use std::fmt;

use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

// ==============================================================================
// CORE PATIENT RECORD MODELS
// ==============================================================================

/// One booked visit, as stored and as served over the wire.
///
/// Everything except `status` is immutable after creation; `id` is assigned
/// by the store and unique for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub date: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub symptoms: Vec<String>,
    pub predicted_disease: Option<String>,
    pub confidence: Option<f32>,
    pub common_prescriptions: Vec<String>,
    pub status: AppointmentStatus,
}

/// Booking data before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewPatientRecord {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub appointment_type: String,
    pub symptoms: Vec<String>,
    pub predicted_disease: Option<String>,
    pub confidence: Option<f32>,
    pub common_prescriptions: Vec<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Booked,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Booked => write!(f, "booked"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Booking payload. Fields default to empty so that a missing field and an
/// empty one surface the same validation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default)]
    pub appointment_type: String,
    /// Comma-separated free text as typed at the front desk.
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Patient not found")]
    NotFound,

    #[error("{field} is required")]
    MissingField { field: &'static str },
}

impl From<AppointmentError> for AppError {
    fn from(e: AppointmentError) -> Self {
        match e {
            AppointmentError::NotFound => AppError::NotFound(e.to_string()),
            AppointmentError::MissingField { .. } => AppError::ValidationError(e.to_string()),
        }
    }
}
