use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{GeneratePdfRequest, PdfBase64Response};
use crate::services::document::PrescriptionDocument;

fn build_document(
    config: &AppConfig,
    request: &GeneratePdfRequest,
) -> Result<PrescriptionDocument, AppError> {
    if request.patient_name.trim().is_empty() || request.doctor_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Patient name and doctor name are required".to_string(),
        ));
    }

    Ok(PrescriptionDocument::new(
        config.clinic_name.clone(),
        request.patient_name.clone(),
        request.doctor_name.clone(),
        request.diagnosis.clone(),
        request.prescription.clone(),
    ))
}

pub fn pdf_response(bytes: Vec<u8>, filename: &str) -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| AppError::Internal(e.to_string()))?,
    );
    Ok((headers, bytes).into_response())
}

/// Generate and download a PDF prescription.
#[axum::debug_handler]
pub async fn generate_pdf(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<Response, AppError> {
    let document = build_document(&config, &request)?;

    let bytes = document
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to generate PDF: {e}")))?;

    pdf_response(bytes, &document.download_filename(Utc::now()))
}

/// Generate a PDF and return it base64-encoded for inline web display.
#[axum::debug_handler]
pub async fn generate_pdf_base64(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<Json<PdfBase64Response>, AppError> {
    let document = build_document(&config, &request)?;

    let bytes = document
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to generate PDF: {e}")))?;

    Ok(Json(PdfBase64Response {
        status: "success".to_string(),
        pdf_base64: STANDARD.encode(&bytes),
        filename: document.download_filename(Utc::now()),
    }))
}
