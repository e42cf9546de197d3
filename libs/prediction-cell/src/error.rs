use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Failed to read model artifact: {0}")]
    ArtifactRead(#[from] std::io::Error),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Model initialization failed: {0}")]
    ModelInit(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}
