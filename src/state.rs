//! Application state management

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::ocr::OcrService;
use crate::script::ScriptClassifier;
use crate::translit::TranslitService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    db: SqlitePool,
    classifier: ScriptClassifier,
    ocr: OcrService,
    translit: TranslitService,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        config: Config,
        db: SqlitePool,
        classifier: ScriptClassifier,
        ocr: OcrService,
        translit: TranslitService,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                classifier,
                ocr,
                translit,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the database pool
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the script classifier
    pub fn classifier(&self) -> &ScriptClassifier {
        &self.inner.classifier
    }

    /// Get the OCR service
    pub fn ocr(&self) -> &OcrService {
        &self.inner.ocr
    }

    /// Get the transliteration service
    pub fn translit(&self) -> &TranslitService {
        &self.inner.translit
    }
}
