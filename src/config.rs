//! Configuration management for Lipi Server

use std::env;

use crate::ocr::{OcrEngineKind, OcrServiceConfig};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub ocr: OcrServiceConfig,
    pub translit: TranslitConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct TranslitConfig {
    /// Aksharamukha base URL; `None` disables transliteration
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:./phrasebook.db".to_string(),
            },
            ocr: OcrServiceConfig::default(),
            translit: TranslitConfig {
                base_url: Some("http://localhost:8085".to_string()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
            },
            ocr: OcrServiceConfig {
                engines: match env::var("OCR_ENGINES") {
                    Ok(list) => parse_engines(&list),
                    Err(_) => defaults.ocr.engines,
                },
                default_language: env::var("OCR_DEFAULT_LANG")
                    .unwrap_or(defaults.ocr.default_language),
                ollama_url: env::var("OLLAMA_URL").unwrap_or(defaults.ocr.ollama_url),
                ollama_model: env::var("OLLAMA_MODEL").unwrap_or(defaults.ocr.ollama_model),
            },
            translit: TranslitConfig {
                base_url: match env::var("AKSHARAMUKHA_URL") {
                    Ok(url) if url.is_empty() => None,
                    Ok(url) => Some(url),
                    Err(_) => defaults.translit.base_url,
                },
            },
        }
    }
}

/// Parse a comma-separated engine list; unknown names are skipped with a
/// warning, and an empty result disables OCR.
fn parse_engines(list: &str) -> Vec<OcrEngineKind> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|name| match name {
            "tesseract" => Some(OcrEngineKind::Tesseract),
            "ollama" => Some(OcrEngineKind::Ollama),
            other => {
                tracing::warn!("unknown OCR engine '{}' in OCR_ENGINES, skipping", other);
                None
            }
        })
        .collect()
}
