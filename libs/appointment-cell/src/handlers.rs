use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use prescription_cell::handlers::pdf_response;
use prescription_cell::PrescriptionDocument;
use shared_models::error::AppError;

use crate::models::{BookAppointmentRequest, PatientRecord, UpdateStatusRequest};
use crate::services::booking::BookingService;
use crate::state::AppointmentState;

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppointmentState>>,
) -> Json<Vec<PatientRecord>> {
    Json(state.store.list().await)
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppointmentState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = BookingService::new(&state.store, &state.predictor);
    let patient = service.book(request).await.map_err(AppError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment created successfully",
            "patient": patient
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<AppointmentState>>,
    Path(patient_id): Path<u64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = state
        .store
        .update_status(patient_id, request.status)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({
        "message": "Appointment status updated successfully",
        "patient": patient
    })))
}

/// Download the prescription PDF for a stored patient, filled from the
/// predicted diagnosis and the common-prescription lookup.
#[axum::debug_handler]
pub async fn download_patient_prescription(
    State(state): State<Arc<AppointmentState>>,
    Path(patient_id): Path<u64>,
) -> Result<Response, AppError> {
    let patient = state
        .store
        .get(patient_id)
        .await
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    let diagnosis = patient
        .predicted_disease
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());

    let document = PrescriptionDocument::new(
        state.config.clinic_name.clone(),
        patient.name.clone(),
        state.config.house_doctor_name.clone(),
        diagnosis,
        patient.common_prescriptions.clone(),
    );

    let bytes = document
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to generate PDF: {e}")))?;

    pdf_response(bytes, &document.download_filename(Utc::now()))
}
