//! OCR Module
//!
//! Extracts text from images through pluggable OCR backends, with a
//! script-aware retry: the first pass runs in the backend's default
//! Latin mode, its output is classified, and a second pass with the
//! script's own language pack runs when that promises a better read.
//!
//! Supported backends:
//! - Tesseract (local binary)
//! - Ollama vision models (local LLM)

mod provider;
mod service;
mod types;

pub use provider::{OcrEngine, OllamaVisionEngine, TesseractEngine};
pub use service::{OcrService, OcrServiceConfig};
pub use types::{OcrEngineKind, OcrError, OcrExtraction};

#[cfg(test)]
pub(crate) use provider::ScriptedEngine;
