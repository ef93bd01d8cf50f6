use neuroscan_common::IntakeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeuroScanError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("Diagnosis failed: {0}")]
    Diagnosis(String),

    #[error("Inference server unreachable: {0}")]
    Unreachable(String),

    #[error("Inference server responded with an error: {0}")]
    ServerStatus(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NeuroScanError>;
