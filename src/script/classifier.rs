//! Majority-script classification with a confidence score.

use std::collections::HashMap;

use serde::Serialize;

use super::catalog::{ScriptRange, DEFAULT_CATALOG, DEFAULT_SCRIPT};

/// Outcome of classifying one text sample.
///
/// `confidence` is the winning script's share of all classified
/// characters; characters outside every catalog range (digits,
/// punctuation, whitespace) count toward nothing.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptDetection {
    /// Winning script, or [`DEFAULT_SCRIPT`] when nothing matched.
    pub script: &'static str,
    /// Character count for the winning script.
    pub top_count: usize,
    /// Sum of counts across all scripts.
    pub total_matched: usize,
    /// Per-script counts; scripts with zero matches are omitted.
    pub breakdown: HashMap<&'static str, usize>,
    /// `top_count / total_matched`, or 0.0 when nothing matched.
    pub confidence: f64,
}

impl ScriptDetection {
    fn unclassified() -> Self {
        Self {
            script: DEFAULT_SCRIPT,
            top_count: 0,
            total_matched: 0,
            breakdown: HashMap::new(),
            confidence: 0.0,
        }
    }
}

/// Counts characters per catalog script and picks the majority.
///
/// The catalog is injected so tests can substitute a reduced one;
/// [`ScriptClassifier::default`] uses the full built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScriptClassifier {
    catalog: &'static [ScriptRange],
}

impl Default for ScriptClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG)
    }
}

impl ScriptClassifier {
    pub fn new(catalog: &'static [ScriptRange]) -> Self {
        Self { catalog }
    }

    /// Classify `text`. Total over all inputs; empty or fully
    /// unrecognized text yields the fallback with zero confidence.
    pub fn detect(&self, text: &str) -> ScriptDetection {
        let mut counts = vec![0usize; self.catalog.len()];
        for c in text.chars() {
            for (i, range) in self.catalog.iter().enumerate() {
                if range.contains(c) {
                    counts[i] += 1;
                }
            }
        }

        let total_matched: usize = counts.iter().sum();
        if total_matched == 0 {
            return ScriptDetection::unclassified();
        }

        // First declared range wins ties, so compare strictly.
        let mut top_idx = 0;
        for (i, &count) in counts.iter().enumerate() {
            if count > counts[top_idx] {
                top_idx = i;
            }
        }

        let mut breakdown = HashMap::new();
        for (range, &count) in self.catalog.iter().zip(counts.iter()) {
            if count > 0 {
                breakdown.insert(range.script, count);
            }
        }

        let top_count = counts[top_idx];
        ScriptDetection {
            script: self.catalog[top_idx].script,
            top_count,
            total_matched,
            breakdown,
            confidence: top_count as f64 / total_matched as f64,
        }
    }
}
