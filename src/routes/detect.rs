//! Script detection endpoint

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::script::ScriptDetection;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
}

/// Classify a text sample by script
///
/// POST /api/v1/detect
pub async fn detect_text(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Json<ScriptDetection> {
    Json(state.classifier().detect(&request.text))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::{app, testing};

    async fn post_detect(text: &str) -> serde_json::Value {
        let state = testing::bare_state().await;
        let body = serde_json::json!({ "text": text }).to_string();
        let response = app(state)
            .oneshot(
                Request::post("/api/v1/detect")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn detects_devanagari() {
        let body = post_detect("नमस्ते").await;
        assert_eq!(body["script"], "Devanagari");
        assert_eq!(body["top_count"], 6);
        assert_eq!(body["total_matched"], 6);
        assert_eq!(body["confidence"], 1.0);
        assert_eq!(body["breakdown"]["Devanagari"], 6);
    }

    #[tokio::test]
    async fn empty_text_reports_fallback() {
        let body = post_detect("").await;
        assert_eq!(body["script"], "ISO");
        assert_eq!(body["total_matched"], 0);
        assert_eq!(body["confidence"], 0.0);
        assert!(body["breakdown"].as_object().unwrap().is_empty());
    }
}
