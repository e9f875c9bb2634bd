//! Route modules for Lipi Server

pub mod detect;
pub mod health;
pub mod ocr;
pub mod phrasebook;
pub mod scripts;
pub mod transliterate;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .route("/api/v1/scripts", get(scripts::list_scripts))
        .route("/api/v1/detect", post(detect::detect_text))
        .route("/api/v1/ocr", post(ocr::extract_text))
        .route("/api/v1/ocr/engines", get(ocr::list_engines))
        .route("/api/v1/transliterate", post(transliterate::transliterate_text))
        .nest("/api/v1/phrasebook", phrasebook::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
