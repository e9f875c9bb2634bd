//! Lipi Server Library
//!
//! Indian-script transliteration service. Text arrives typed or inside a
//! photo; it leaves in the script the caller asked for.
//!
//! # Modules
//!
//! - `script`: Unicode-range script detection with confidence scoring
//! - `ocr`: pluggable OCR engines with a script-aware language retry
//! - `translit`: source-script resolution over the Aksharamukha backend
//! - `phrasebook`: SQLite persistence for saved conversions
//! - `routes`: the axum HTTP surface
//!
//! The server binary is in main.rs.

pub mod config;
pub mod db;
pub mod error;
pub mod ocr;
pub mod phrasebook;
pub mod routes;
pub mod script;
pub mod state;
pub mod translit;
