pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::classifier::{DiagnosisModel, LinearClassifier};
#[cfg(feature = "onnx-model")]
pub use services::classifier::OnnxClassifier;
pub use services::predictor::DiseasePredictor;
pub use services::prescriptions::PrescriptionTable;
pub use services::vocab::SymptomVocabulary;
