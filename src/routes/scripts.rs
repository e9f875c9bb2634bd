//! Supported-script listing
//!
//! Enumerates the script codes a caller may use as source or target,
//! with display labels for selection UIs.

use axum::Json;
use serde::Serialize;

use crate::script::SCRIPT_LABELS;

#[derive(Debug, Serialize)]
pub struct ScriptInfo {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct ScriptsResponse {
    pub scripts: Vec<ScriptInfo>,
}

pub async fn list_scripts() -> Json<ScriptsResponse> {
    Json(ScriptsResponse {
        scripts: SCRIPT_LABELS
            .iter()
            .map(|&(code, label)| ScriptInfo { code, label })
            .collect(),
    })
}
