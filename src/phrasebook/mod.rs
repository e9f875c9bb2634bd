//! Phrasebook Module
//!
//! Persists saved transliterations (phrases) in SQLite.

mod store;
mod types;

pub use store::PhrasebookRepository;
pub use types::Phrase;
