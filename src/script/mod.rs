//! Script Detection
//!
//! Classifies text by writing system using fixed Unicode block ranges.
//! The catalog covers the ten Indic scripts the transliteration backend
//! supports, plus basic Latin, which doubles as the "romanized or
//! unclassified" fallback.

mod catalog;
mod classifier;

pub use catalog::{
    ocr_language_for, ScriptRange, DEFAULT_CATALOG, DEFAULT_OCR_LANGUAGE, DEFAULT_SCRIPT,
    OCR_LANGUAGE_HINTS, SCRIPT_LABELS,
};
pub use classifier::{ScriptClassifier, ScriptDetection};
