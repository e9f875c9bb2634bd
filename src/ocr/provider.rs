//! OCR Engines
//!
//! Defines the engine trait and implementations for the supported OCR
//! backends.

use async_trait::async_trait;

use super::types::{OcrEngineKind, OcrError};

/// OCR engine capability.
///
/// `language` is a Tesseract-style code ("hin", "tam", ...); `None` runs
/// the engine in its default (Latin/English) mode.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Get the engine type
    fn kind(&self) -> OcrEngineKind;

    /// Check if the engine is usable right now
    async fn is_available(&self) -> bool;

    /// Run a single OCR pass over an image
    async fn recognize(&self, image_data: &[u8], language: Option<&str>)
        -> Result<String, OcrError>;
}

/// Tesseract OCR engine, driven through the installed binary.
pub struct TesseractEngine {
    /// Language used when the caller does not pick one
    default_language: String,
}

impl TesseractEngine {
    pub fn new(default_language: &str) -> Self {
        Self {
            default_language: default_language.to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn kind(&self) -> OcrEngineKind {
        OcrEngineKind::Tesseract
    }

    async fn is_available(&self) -> bool {
        std::process::Command::new("tesseract")
            .arg("--version")
            .output()
            .is_ok()
    }

    async fn recognize(
        &self,
        image_data: &[u8],
        language: Option<&str>,
    ) -> Result<String, OcrError> {
        use std::process::Command;

        let lang = language.unwrap_or(&self.default_language);

        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", uuid::Uuid::new_v4()));
        let output_base = temp_dir.join(format!("ocr_output_{}", uuid::Uuid::new_v4()));

        std::fs::write(&input_path, image_data)
            .map_err(|e| OcrError::Engine(format!("Failed to write temp file: {}", e)))?;

        let output = Command::new("tesseract")
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(lang)
            .arg("--oem")
            .arg("3")
            .arg("--psm")
            .arg("3")
            .output()
            .map_err(|e| OcrError::Engine(format!("Failed to run tesseract: {}", e)));

        let _ = std::fs::remove_file(&input_path);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!("Tesseract failed: {}", stderr)));
        }

        let output_file = format!("{}.txt", output_base.display());
        let text = std::fs::read_to_string(&output_file)
            .map_err(|e| OcrError::Engine(format!("Failed to read output: {}", e)))?;

        let _ = std::fs::remove_file(&output_file);

        Ok(text)
    }
}

/// Ollama vision model engine
pub struct OllamaVisionEngine {
    /// Ollama API URL
    base_url: String,
    /// Model name (e.g., "llava", "bakllava")
    model: String,
}

impl OllamaVisionEngine {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for OllamaVisionEngine {
    fn kind(&self) -> OcrEngineKind {
        OcrEngineKind::Ollama
    }

    async fn is_available(&self) -> bool {
        let client = reqwest::Client::new();
        let url = format!("{}/api/tags", self.base_url);

        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn recognize(
        &self,
        image_data: &[u8],
        language: Option<&str>,
    ) -> Result<String, OcrError> {
        use base64::Engine;

        let client = reqwest::Client::new();
        let url = format!("{}/api/generate", self.base_url);

        let image_base64 = base64::engine::general_purpose::STANDARD.encode(image_data);

        let lang_hint = language
            .map(|l| format!(" The text uses the '{}' language pack.", l))
            .unwrap_or_default();

        let prompt = format!(
            "Extract all text from this image exactly as written.{} Return only the extracted text, nothing else.",
            lang_hint
        );

        let request = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "images": [image_base64],
            "stream": false
        });

        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::Engine(format!("Failed to call Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Engine(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OcrError::Engine(format!("Failed to parse response: {}", e)))?;

        let text = result["response"].as_str().unwrap_or("").to_string();

        Ok(text)
    }
}

/// Scripted engine for testing: replies per requested language.
#[cfg(test)]
pub struct ScriptedEngine {
    /// Reply for the default (no language) pass
    pub default_pass: Result<String, String>,
    /// Replies keyed by language code
    pub by_language: std::collections::HashMap<String, Result<String, String>>,
    pub available: bool,
}

#[cfg(test)]
impl ScriptedEngine {
    pub fn new(default_pass: Result<&str, &str>) -> Self {
        Self {
            default_pass: default_pass.map(String::from).map_err(String::from),
            by_language: std::collections::HashMap::new(),
            available: true,
        }
    }

    pub fn with_language(mut self, lang: &str, reply: Result<&str, &str>) -> Self {
        self.by_language
            .insert(lang.to_string(), reply.map(String::from).map_err(String::from));
        self
    }
}

#[cfg(test)]
#[async_trait]
impl OcrEngine for ScriptedEngine {
    fn kind(&self) -> OcrEngineKind {
        OcrEngineKind::Tesseract
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn recognize(
        &self,
        _image_data: &[u8],
        language: Option<&str>,
    ) -> Result<String, OcrError> {
        let reply = match language {
            None => &self.default_pass,
            Some(lang) => self
                .by_language
                .get(lang)
                .unwrap_or(&self.default_pass),
        };
        reply.clone().map_err(OcrError::Engine)
    }
}
