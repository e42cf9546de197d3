pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::prescription_routes;
pub use services::document::PrescriptionDocument;
