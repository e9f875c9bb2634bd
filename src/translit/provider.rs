//! Transliteration Backends
//!
//! The engine itself lives outside this service; Aksharamukha is reached
//! over its web API.

use async_trait::async_trait;

use super::types::TranslitError;

/// Transliteration engine capability.
///
/// `source` and `target` are Aksharamukha script names; the text goes
/// through verbatim and the backend's output comes back unchanged.
#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Convert `text` from `source` script to `target` script
    async fn transliterate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslitError>;
}

/// Aksharamukha web-API backend
pub struct AksharamukhaHttp {
    /// Service base URL
    base_url: String,
    client: reqwest::Client,
}

impl AksharamukhaHttp {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transliterator for AksharamukhaHttp {
    async fn transliterate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslitError> {
        let url = format!("{}/api/public", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("source", source), ("target", target), ("text", text)])
            .send()
            .await
            .map_err(|e| TranslitError::Backend(format!("Failed to call Aksharamukha: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslitError::Backend(format!(
                "Aksharamukha returned {}: {}",
                status, body
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TranslitError::Backend(format!("Failed to read response: {}", e)))
    }
}

/// Recording backend for tests: remembers the scripts it was called with.
#[cfg(test)]
pub struct RecordingBackend {
    pub calls: std::sync::Mutex<Vec<(String, String, String)>>,
}

#[cfg(test)]
impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Transliterator for RecordingBackend {
    async fn transliterate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslitError> {
        self.calls.lock().unwrap().push((
            source.to_string(),
            target.to_string(),
            text.to_string(),
        ));
        Ok(format!("{}:{}:{}", source, target, text))
    }
}
