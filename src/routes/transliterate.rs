//! Transliteration endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TransliterateRequest {
    #[serde(default)]
    pub text: String,
    /// Source script hint; "ISO" is resolved against the text itself
    #[serde(default)]
    pub src: String,
    /// Target script
    #[serde(default)]
    pub tgt: String,
}

#[derive(Debug, Serialize)]
pub struct TransliterateResponse {
    pub result: String,
}

/// Transliterate text between scripts
///
/// POST /api/v1/transliterate
pub async fn transliterate_text(
    State(state): State<AppState>,
    Json(request): Json<TransliterateRequest>,
) -> Result<Json<TransliterateResponse>> {
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Empty text".to_string()));
    }

    let result = state
        .translit()
        .resolve(&request.src, &request.tgt, &request.text)
        .await?;

    Ok(Json(TransliterateResponse { result }))
}
