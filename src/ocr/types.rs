//! OCR Types
//!
//! Types shared by the OCR engines and the extraction service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// OCR engine backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngineKind {
    /// Tesseract binary (local).
    Tesseract,
    /// Ollama vision model (local LLM).
    Ollama,
}

/// Result of a smart extraction: the chosen pass's text plus the
/// classification that drove (and describes) the choice.
#[derive(Debug, Clone, Serialize)]
pub struct OcrExtraction {
    /// Text of the winning pass, whitespace-trimmed.
    pub text: String,
    /// Language code of the winning pass.
    pub used_language: String,
    /// Script detected on the first pass's text. This is the signal that
    /// triggered the retry, not a re-detection of the final text.
    pub detected_script: &'static str,
    /// Per-script character counts of the final text.
    pub breakdown: HashMap<&'static str, usize>,
    /// Confidence of the dominant script in the final text.
    pub confidence: f64,
}

/// OCR error types
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("no OCR engine available: {0}")]
    Unavailable(String),

    #[error("OCR engine failed: {0}")]
    Engine(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),
}

impl OcrError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidImage(_) => StatusCode::BAD_REQUEST,
            Self::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
