use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers;
use crate::state::AppointmentState;

pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::book_appointment),
        )
        .route("/{patient_id}", put(handlers::update_appointment_status))
        .with_state(state)
}

/// Stored-patient prescription downloads, mounted beside the stateless
/// PDF generation routes.
pub fn patient_pdf_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route(
            "/generate-pdf/{patient_id}",
            get(handlers::download_patient_prescription),
        )
        .with_state(state)
}
