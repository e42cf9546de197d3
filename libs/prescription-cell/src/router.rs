use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn prescription_routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/generate-pdf", post(handlers::generate_pdf))
        .route("/generate-pdf-base64", post(handlers::generate_pdf_base64))
        .with_state(config)
}
