//! Transliteration Service
//!
//! Resolves the source script before delegating to the backend. Callers
//! frequently send the romanized "ISO" code when they simply do not know
//! the source script; when the text itself classifies as a native script,
//! that detection replaces the uninformative hint. An explicit
//! native-script hint is always respected, even if detection disagrees.

use std::sync::Arc;

use crate::script::{ScriptClassifier, DEFAULT_SCRIPT};

use super::{provider::Transliterator, types::TranslitError};

/// Transliteration service over an optional backend
pub struct TranslitService {
    backend: Option<Arc<dyn Transliterator>>,
    classifier: ScriptClassifier,
}

impl TranslitService {
    pub fn new(backend: Option<Arc<dyn Transliterator>>, classifier: ScriptClassifier) -> Self {
        Self { backend, classifier }
    }

    /// Transliterate `text` into `target_script`, upgrading an "ISO"
    /// source hint to the detected script when the text is clearly native.
    pub async fn resolve(
        &self,
        source_hint: &str,
        target_script: &str,
        text: &str,
    ) -> Result<String, TranslitError> {
        let backend = self.backend.as_ref().ok_or(TranslitError::Unavailable)?;

        let mut source = source_hint;
        if source_hint == DEFAULT_SCRIPT {
            let detected = self.classifier.detect(text);
            if detected.script != DEFAULT_SCRIPT {
                tracing::debug!(
                    "source hint '{}' upgraded to detected script '{}'",
                    source_hint,
                    detected.script
                );
                source = detected.script;
            }
        }

        backend.transliterate(source, target_script, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::provider::RecordingBackend;

    fn service_with_recorder() -> (TranslitService, Arc<RecordingBackend>) {
        let recorder = Arc::new(RecordingBackend::new());
        let service = TranslitService::new(
            Some(recorder.clone() as Arc<dyn Transliterator>),
            ScriptClassifier::default(),
        );
        (service, recorder)
    }

    #[tokio::test]
    async fn missing_backend_is_unavailable() {
        let service = TranslitService::new(None, ScriptClassifier::default());
        let err = service
            .resolve("ISO", "Devanagari", "namaste")
            .await
            .unwrap_err();
        assert!(matches!(err, TranslitError::Unavailable));
    }

    #[tokio::test]
    async fn iso_hint_upgrades_to_detected_script() {
        let (service, recorder) = service_with_recorder();
        service.resolve("ISO", "Tamil", "வணக்கம்").await.unwrap();
        let calls = recorder.calls.lock().unwrap();
        // The backend sees a same-script pair; whether that is a no-op is
        // its concern.
        assert_eq!(calls[0], ("Tamil".into(), "Tamil".into(), "வணக்கம்".into()));
    }

    #[tokio::test]
    async fn iso_hint_kept_for_latin_text() {
        let (service, recorder) = service_with_recorder();
        service.resolve("ISO", "Kannada", "namaste").await.unwrap();
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls[0].0, "ISO");
        assert_eq!(calls[0].1, "Kannada");
    }

    #[tokio::test]
    async fn explicit_hint_is_never_overridden() {
        let (service, recorder) = service_with_recorder();
        // The hint is wrong for this text, but it was explicit.
        service
            .resolve("Devanagari", "Telugu", "வணக்கம்")
            .await
            .unwrap();
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls[0].0, "Devanagari");
    }

    #[tokio::test]
    async fn text_reaches_backend_verbatim() {
        let (service, recorder) = service_with_recorder();
        let text = "  नमस्ते,  दुनिया!  ";
        service.resolve("ISO", "Tamil", text).await.unwrap();
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls[0].2, text);
        assert_eq!(calls[0].0, "Devanagari");
    }
}
