//! Transliteration error types.

/// Transliteration failure modes
#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error("transliteration backend not configured")]
    Unavailable,

    #[error("transliteration failed: {0}")]
    Backend(String),
}

impl TranslitError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
