use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePdfRequest {
    pub patient_name: String,
    pub doctor_name: String,
    #[serde(default)]
    pub prescription: Vec<String>,
    pub diagnosis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfBase64Response {
    pub status: String,
    pub pdf_base64: String,
    pub filename: String,
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("PDF render failed: {0}")]
    Render(String),
}
