//! Phrasebook routes
//!
//! CRUD over saved phrases, plus JSON download of one phrase or the
//! whole book.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Json, Router,
};
use axum::body::Body;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::phrasebook::{Phrase, PhrasebookRepository};
use crate::script::DEFAULT_SCRIPT;
use crate::state::AppState;

/// Create the phrasebook router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_phrases).post(save_phrase))
        .route("/download", get(download_all))
        .route("/:id", get(get_phrase).delete(delete_phrase))
        .route("/:id/download", get(download_phrase))
}

#[derive(Debug, Deserialize)]
pub struct SavePhraseRequest {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_script")]
    pub src: String,
    #[serde(default = "default_script")]
    pub tgt: String,
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_script() -> String {
    DEFAULT_SCRIPT.to_string()
}

/// Save a phrase
///
/// POST /api/v1/phrasebook
async fn save_phrase(
    State(state): State<AppState>,
    Json(request): Json<SavePhraseRequest>,
) -> Result<Json<Phrase>> {
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Empty text".to_string()));
    }

    let phrase = Phrase::new(&request.title, &request.text, &request.src, &request.tgt);
    PhrasebookRepository::new(state.db()).save(&phrase).await?;

    tracing::debug!("saved phrase '{}' ({} -> {})", phrase.title, phrase.src, phrase.tgt);
    Ok(Json(phrase))
}

/// Listing entry; long texts are cut down for the overview
#[derive(Debug, Serialize)]
pub struct PhraseSummary {
    pub id: String,
    pub title: String,
    pub src: String,
    pub tgt: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct PhraseListResponse {
    pub count: usize,
    pub items: Vec<PhraseSummary>,
}

const LIST_TEXT_LIMIT: usize = 400;

/// List phrases, newest first
///
/// GET /api/v1/phrasebook
async fn list_phrases(State(state): State<AppState>) -> Result<Json<PhraseListResponse>> {
    let phrases = PhrasebookRepository::new(state.db()).list().await?;

    let items: Vec<PhraseSummary> = phrases
        .into_iter()
        .map(|p| PhraseSummary {
            id: p.id,
            title: p.title,
            src: p.src,
            tgt: p.tgt,
            text: p.text.chars().take(LIST_TEXT_LIMIT).collect(),
        })
        .collect();

    Ok(Json(PhraseListResponse {
        count: items.len(),
        items,
    }))
}

/// Get a single phrase
///
/// GET /api/v1/phrasebook/:id
async fn get_phrase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Phrase>> {
    let phrase = PhrasebookRepository::new(state.db())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Phrase '{}' not found", id)))?;

    Ok(Json(phrase))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Delete a phrase
///
/// DELETE /api/v1/phrasebook/:id
async fn delete_phrase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let deleted = PhrasebookRepository::new(state.db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Phrase '{}' not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

/// Download one phrase as a JSON attachment
///
/// GET /api/v1/phrasebook/:id/download
async fn download_phrase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let phrase = PhrasebookRepository::new(state.db())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Phrase '{}' not found", id)))?;

    json_attachment(&phrase, &format!("phrase_{}.json", phrase.id))
}

/// Download the whole phrasebook as a JSON attachment
///
/// GET /api/v1/phrasebook/download
async fn download_all(State(state): State<AppState>) -> Result<Response> {
    let phrases = PhrasebookRepository::new(state.db()).list().await?;
    json_attachment(&phrases, "phrasebook.json")
}

fn json_attachment<T: Serialize>(value: &T, filename: &str) -> Result<Response> {
    let body = serde_json::to_vec_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize phrasebook: {}", e)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(body))
        .map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::routes::{app, testing};

    async fn server() -> TestServer {
        TestServer::new(app(testing::bare_state().await)).unwrap()
    }

    #[tokio::test]
    async fn save_list_get_delete_roundtrip() {
        let server = server().await;

        let saved = server
            .post("/api/v1/phrasebook")
            .json(&serde_json::json!({
                "title": "Road sign",
                "text": "नमस्ते",
                "src": "Devanagari",
                "tgt": "Tamil"
            }))
            .await;
        saved.assert_status_ok();
        let id = saved.json::<serde_json::Value>()["id"]
            .as_str()
            .unwrap()
            .to_string();

        let listed = server.get("/api/v1/phrasebook").await;
        listed.assert_status_ok();
        let body = listed.json::<serde_json::Value>();
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["title"], "Road sign");

        let fetched = server.get(&format!("/api/v1/phrasebook/{}", id)).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<serde_json::Value>()["text"], "नमस्ते");

        let deleted = server.delete(&format!("/api/v1/phrasebook/{}", id)).await;
        deleted.assert_status_ok();

        let gone = server.get(&format!("/api/v1/phrasebook/{}", id)).await;
        gone.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let server = server().await;
        let response = server
            .post("/api/v1/phrasebook")
            .json(&serde_json::json!({ "title": "t", "text": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn defaults_fill_missing_fields() {
        let server = server().await;
        let saved = server
            .post("/api/v1/phrasebook")
            .json(&serde_json::json!({ "text": "வணக்கம்" }))
            .await;
        saved.assert_status_ok();
        let body = saved.json::<serde_json::Value>();
        assert_eq!(body["title"], "Untitled");
        assert_eq!(body["src"], "ISO");
        assert_eq!(body["tgt"], "ISO");
    }

    #[tokio::test]
    async fn listing_truncates_long_text() {
        let server = server().await;
        let long_text = "அ".repeat(600);
        server
            .post("/api/v1/phrasebook")
            .json(&serde_json::json!({ "text": long_text }))
            .await
            .assert_status_ok();

        let listed = server.get("/api/v1/phrasebook").await;
        let body = listed.json::<serde_json::Value>();
        let shown = body["items"][0]["text"].as_str().unwrap();
        assert_eq!(shown.chars().count(), 400);
    }

    #[tokio::test]
    async fn deleting_unknown_phrase_is_not_found() {
        let server = server().await;
        let response = server.delete("/api/v1/phrasebook/no-such-id").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn download_sets_attachment_headers() {
        let server = server().await;
        let saved = server
            .post("/api/v1/phrasebook")
            .json(&serde_json::json!({ "text": "ಶುಭಾಶಯ", "src": "Kannada", "tgt": "ISO" }))
            .await;
        let id = saved.json::<serde_json::Value>()["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = server
            .get(&format!("/api/v1/phrasebook/{}/download", id))
            .await;
        response.assert_status_ok();
        let disposition = response.header("content-disposition");
        let disposition = disposition.to_str().unwrap();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains(&id));

        let all = server.get("/api/v1/phrasebook/download").await;
        all.assert_status_ok();
        let body = all.json::<serde_json::Value>();
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
