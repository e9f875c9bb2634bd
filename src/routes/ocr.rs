//! OCR endpoint
//!
//! Accepts a multipart image upload, validates and normalizes it to PNG,
//! and runs the script-aware extraction.

use std::io::Cursor;

use axum::{
    extract::{Multipart, State},
    Json,
};

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::ocr::{OcrEngineKind, OcrError, OcrExtraction};
use crate::state::AppState;

#[derive(Serialize)]
pub struct OcrEnginesResponse {
    pub engines: Vec<OcrEngineKind>,
}

/// List the OCR engines that are currently usable
///
/// GET /api/v1/ocr/engines
pub async fn list_engines(State(state): State<AppState>) -> Json<OcrEnginesResponse> {
    Json(OcrEnginesResponse {
        engines: state.ocr().available_engines().await,
    })
}

/// Extract text from an uploaded image
///
/// POST /api/v1/ocr (multipart, field "image")
pub async fn extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OcrExtraction>> {
    let mut image_data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {}", e)))?
    {
        if field.name() == Some("image") {
            image_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read image: {}", e)))?,
            );
        }
    }

    let image_data = image_data.ok_or_else(|| AppError::BadRequest("No image uploaded".to_string()))?;

    // Decode to catch corrupt uploads before they reach an engine, and
    // hand every engine the same RGB PNG regardless of upload format.
    let img = image::load_from_memory(&image_data)
        .map_err(|e| OcrError::InvalidImage(e.to_string()))?;
    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(img.to_rgb8())
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("Failed to re-encode image: {}", e)))?;

    let extraction = state.ocr().extract(&png).await?;

    tracing::info!(
        "OCR extracted {} chars using '{}' (detected {}, confidence {:.2})",
        extraction.text.chars().count(),
        extraction.used_language,
        extraction.detected_script,
        extraction.confidence
    );

    Ok(Json(extraction))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::ocr::{OcrService, ScriptedEngine};
    use crate::routes::{app, testing};
    use crate::script::{ScriptClassifier, DEFAULT_OCR_LANGUAGE};

    const BOUNDARY: &str = "lipi-test-boundary";

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([255, 255, 255]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        png
    }

    fn multipart_body(field_name: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
                 filename=\"upload.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(field_name: &str, bytes: &[u8]) -> Request<Body> {
        Request::post("/api/v1/ocr")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(field_name, bytes)))
            .unwrap()
    }

    fn scripted_service(engine: ScriptedEngine) -> OcrService {
        OcrService::with_engines(
            vec![Arc::new(engine)],
            ScriptClassifier::default(),
            DEFAULT_OCR_LANGUAGE,
        )
    }

    #[tokio::test]
    async fn extracts_with_smart_retry() {
        let engine = ScriptedEngine::new(Ok("నమ")).with_language("tel", Ok("నమస్కారం"));
        let state = testing::state_with(
            scripted_service(engine),
            crate::translit::TranslitService::new(None, ScriptClassifier::default()),
        )
        .await;

        let response = app(state)
            .oneshot(multipart_request("image", &tiny_png()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["text"], "నమస్కారం");
        assert_eq!(body["used_language"], "tel");
        assert_eq!(body["detected_script"], "Telugu");
    }

    #[tokio::test]
    async fn missing_image_field_is_rejected() {
        let state = testing::bare_state().await;
        let response = app(state)
            .oneshot(multipart_request("attachment", &tiny_png()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn undecodable_image_is_rejected() {
        let engine = ScriptedEngine::new(Ok("whatever"));
        let state = testing::state_with(
            scripted_service(engine),
            crate::translit::TranslitService::new(None, ScriptClassifier::default()),
        )
        .await;
        let response = app(state)
            .oneshot(multipart_request("image", b"this is not an image"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn engines_listing_is_empty_without_backends() {
        let state = testing::bare_state().await;
        let response = app(state)
            .oneshot(
                Request::get("/api/v1/ocr/engines")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["engines"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_engine_gives_service_unavailable() {
        let state = testing::bare_state().await;
        let response = app(state)
            .oneshot(multipart_request("image", &tiny_png()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
