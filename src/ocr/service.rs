//! OCR Service
//!
//! Orchestrates OCR engines and the script-aware second pass.
//!
//! A first pass runs in the engine's default (Latin) mode. Its output is
//! classified, and when the detected script suggests a non-default
//! language pack, a second pass runs with that pack. The second pass is
//! best-effort: its failure never turns a successful first pass into an
//! error, and its output is kept only when it beats the first pass.

use std::sync::Arc;

use crate::script::{ScriptClassifier, DEFAULT_OCR_LANGUAGE, OCR_LANGUAGE_HINTS};

use super::{
    provider::{OcrEngine, OllamaVisionEngine, TesseractEngine},
    types::{OcrEngineKind, OcrError, OcrExtraction},
};

/// OCR service configuration
#[derive(Debug, Clone)]
pub struct OcrServiceConfig {
    /// Preferred engine order
    pub engines: Vec<OcrEngineKind>,
    /// Ollama base URL
    pub ollama_url: String,
    /// Ollama model name
    pub ollama_model: String,
    /// Language of the first pass
    pub default_language: String,
}

impl Default for OcrServiceConfig {
    fn default() -> Self {
        Self {
            engines: vec![OcrEngineKind::Tesseract, OcrEngineKind::Ollama],
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llava".to_string(),
            default_language: DEFAULT_OCR_LANGUAGE.to_string(),
        }
    }
}

/// OCR service with script-aware language retry
pub struct OcrService {
    engines: Vec<Arc<dyn OcrEngine>>,
    classifier: ScriptClassifier,
    default_language: String,
    /// Script to language-pack suggestions for the second pass
    hints: &'static [(&'static str, &'static str)],
}

impl OcrService {
    /// Create a new OCR service from configuration
    pub fn new(config: &OcrServiceConfig) -> Self {
        let mut engines: Vec<Arc<dyn OcrEngine>> = Vec::new();

        for kind in &config.engines {
            match kind {
                OcrEngineKind::Tesseract => {
                    engines.push(Arc::new(TesseractEngine::new(&config.default_language)));
                }
                OcrEngineKind::Ollama => {
                    engines.push(Arc::new(OllamaVisionEngine::new(
                        &config.ollama_url,
                        &config.ollama_model,
                    )));
                }
            }
        }

        Self::with_engines(engines, ScriptClassifier::default(), &config.default_language)
    }

    /// Create a service over explicit engines (tests inject mocks here)
    pub fn with_engines(
        engines: Vec<Arc<dyn OcrEngine>>,
        classifier: ScriptClassifier,
        default_language: &str,
    ) -> Self {
        Self {
            engines,
            classifier,
            default_language: default_language.to_string(),
            hints: OCR_LANGUAGE_HINTS,
        }
    }

    /// Replace the script-to-language suggestion table (tests use this to
    /// model unusual engine configurations)
    pub fn with_language_hints(
        mut self,
        hints: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.hints = hints;
        self
    }

    /// Get available engines
    pub async fn available_engines(&self) -> Vec<OcrEngineKind> {
        let mut available = Vec::new();
        for engine in &self.engines {
            if engine.is_available().await {
                available.push(engine.kind());
            }
        }
        available
    }

    /// Pick the first usable engine
    async fn pick_engine(&self) -> Result<&Arc<dyn OcrEngine>, OcrError> {
        if self.engines.is_empty() {
            return Err(OcrError::Unavailable("no OCR engine configured".to_string()));
        }
        for engine in &self.engines {
            if engine.is_available().await {
                return Ok(engine);
            }
        }
        Err(OcrError::Unavailable(
            "no configured OCR engine is reachable".to_string(),
        ))
    }

    /// Extract text from an image, retrying with a script-matched
    /// language pack when the first pass points at a native script.
    ///
    /// Only a first-pass failure is fatal; a second-pass failure degrades
    /// to the first-pass result.
    pub async fn extract(&self, image_data: &[u8]) -> Result<OcrExtraction, OcrError> {
        let engine = self.pick_engine().await?;

        let text0 = engine
            .recognize(image_data, None)
            .await?
            .trim()
            .to_string();

        let first_pass = self.classifier.detect(&text0);
        let suggested: &str = match self
            .hints
            .iter()
            .find(|(script, _)| *script == first_pass.script)
        {
            Some(&(_, lang)) => lang,
            None => &self.default_language,
        };

        let mut used_language = self.default_language.clone();
        let mut final_text = text0;

        if suggested != self.default_language {
            tracing::debug!(
                "first pass detected {}, retrying OCR with language '{}'",
                first_pass.script,
                suggested
            );
            match engine.recognize(image_data, Some(suggested)).await {
                Ok(raw) => {
                    let text1 = raw.trim().to_string();
                    let longer = text1.chars().count() > final_text.chars().count();
                    let rescued = !text1.is_empty() && final_text.is_empty();
                    if longer || rescued {
                        used_language = suggested.to_string();
                        final_text = text1;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "second OCR pass with language '{}' failed: {}, keeping first pass",
                        suggested,
                        e
                    );
                }
            }
        }

        // Confidence reported to the caller describes the text we actually
        // return, while detected_script stays the first-pass signal.
        let summary = self.classifier.detect(&final_text);

        Ok(OcrExtraction {
            text: final_text,
            used_language,
            detected_script: first_pass.script,
            breakdown: summary.breakdown,
            confidence: summary.confidence,
        })
    }
}
