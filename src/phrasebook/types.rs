//! Phrasebook Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved transliteration: the text plus the script pair it was
/// converted between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    /// Generated UUID
    pub id: String,
    pub title: String,
    pub text: String,
    /// Source script code
    pub src: String,
    /// Target script code
    pub tgt: String,
    pub created_at: DateTime<Utc>,
}

impl Phrase {
    pub fn new(title: &str, text: &str, src: &str, tgt: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            text: text.to_string(),
            src: src.to_string(),
            tgt: tgt.to_string(),
            created_at: Utc::now(),
        }
    }
}
