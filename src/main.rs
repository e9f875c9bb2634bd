//! Lipi Server
//!
//! An Indian-script transliteration service: detect the script of typed
//! text, extract text from images with script-aware OCR language
//! selection, transliterate between scripts, and keep a phrasebook of
//! saved conversions.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lipi_server::config::Config;
use lipi_server::db;
use lipi_server::ocr::OcrService;
use lipi_server::routes;
use lipi_server::script::ScriptClassifier;
use lipi_server::state::AppState;
use lipi_server::translit::{AksharamukhaHttp, TranslitService, Transliterator};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lipi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Lipi Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("OCR engines: {:?}", config.ocr.engines);
    match &config.translit.base_url {
        Some(url) => tracing::info!("Aksharamukha endpoint: {}", url),
        None => tracing::warn!("Transliteration disabled (no Aksharamukha endpoint)"),
    }

    // Initialize database
    let db_pool = db::create_pool(&config.database.url)
        .await
        .expect("Failed to initialize database");
    tracing::info!("Database initialized at {}", config.database.url);

    // Wire up the services around the shared classifier
    let classifier = ScriptClassifier::default();
    let ocr = OcrService::new(&config.ocr);
    let backend = config
        .translit
        .base_url
        .as_deref()
        .map(|url| Arc::new(AksharamukhaHttp::new(url)) as Arc<dyn Transliterator>);
    let translit = TranslitService::new(backend, classifier);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid SERVER_HOST/SERVER_PORT");

    // Create application state and router
    let app_state = AppState::new(config, db_pool, classifier, ocr, translit);
    let app = routes::app(app_state);

    // Start server with graceful shutdown
    tracing::info!("Lipi Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
