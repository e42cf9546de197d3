pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::*;
pub use router::{appointment_routes, patient_pdf_routes};
pub use services::booking::BookingService;
pub use services::store::PatientRecordStore;
pub use state::AppointmentState;
