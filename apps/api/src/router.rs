use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, patient_pdf_routes, AppointmentState};
use prescription_cell::prescription_routes;

pub fn create_router(state: Arc<AppointmentState>) -> Router {
    // Ad-hoc and stored-patient PDF downloads share the /api prefix
    let pdf_routes =
        prescription_routes(state.config.clone()).merge(patient_pdf_routes(state.clone()));

    Router::new()
        .route("/", get(|| async { "Clinic Desk API is running!" }))
        .nest("/api/appointments", appointment_routes(state))
        .nest("/api", pdf_routes)
}
