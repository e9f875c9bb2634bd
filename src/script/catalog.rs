//! Static script catalog and language tables.
//!
//! Script identifiers follow the Aksharamukha naming scheme so they can be
//! passed to the transliteration backend verbatim.

/// Script code reported for Latin or unclassified text.
///
/// "ISO" is the romanization scheme the transliteration backend uses for
/// Latin-script input, so it does double duty as the fallback
/// classification and as the code a caller sends when the source script is
/// unknown.
pub const DEFAULT_SCRIPT: &str = "ISO";

/// OCR language code used when no better suggestion exists.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// The Unicode blocks belonging to one script.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRange {
    /// Script identifier (Aksharamukha name).
    pub script: &'static str,
    /// Inclusive code-point intervals.
    pub blocks: &'static [(u32, u32)],
}

impl ScriptRange {
    /// Whether `c` falls inside any of this script's blocks.
    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        self.blocks.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
    }
}

/// The fixed, ordered script catalog.
///
/// Intervals are pairwise disjoint across entries; a character matches at
/// most one script. Declaration order is the tie-break order when two
/// scripts count the same number of characters, so it must stay stable.
pub const DEFAULT_CATALOG: &[ScriptRange] = &[
    ScriptRange {
        script: "Devanagari",
        blocks: &[(0x0900, 0x097F)],
    },
    ScriptRange {
        script: "Bengali",
        blocks: &[(0x0980, 0x09FF)],
    },
    ScriptRange {
        script: "Gurmukhi",
        blocks: &[(0x0A00, 0x0A7F)],
    },
    ScriptRange {
        script: "Gujarati",
        blocks: &[(0x0A80, 0x0AFF)],
    },
    ScriptRange {
        script: "Oriya",
        blocks: &[(0x0B00, 0x0B7F)],
    },
    ScriptRange {
        script: "Tamil",
        blocks: &[(0x0B80, 0x0BFF)],
    },
    ScriptRange {
        script: "Telugu",
        blocks: &[(0x0C00, 0x0C7F)],
    },
    ScriptRange {
        script: "Kannada",
        blocks: &[(0x0C80, 0x0CFF)],
    },
    ScriptRange {
        script: "Malayalam",
        blocks: &[(0x0D00, 0x0D7F)],
    },
    ScriptRange {
        script: "Sinhala",
        blocks: &[(0x0D80, 0x0DFF)],
    },
    // Basic Latin letters only; digits and punctuation stay unclassified.
    ScriptRange {
        script: DEFAULT_SCRIPT,
        blocks: &[(0x0041, 0x005A), (0x0061, 0x007A)],
    },
];

/// Script identifier to Tesseract language code.
pub const OCR_LANGUAGE_HINTS: &[(&str, &str)] = &[
    ("Devanagari", "hin"),
    ("Bengali", "ben"),
    ("Gurmukhi", "pan"),
    ("Gujarati", "guj"),
    ("Oriya", "ori"),
    ("Tamil", "tam"),
    ("Telugu", "tel"),
    ("Kannada", "kan"),
    ("Malayalam", "mal"),
    ("Sinhala", "sin"),
    (DEFAULT_SCRIPT, DEFAULT_OCR_LANGUAGE),
];

/// Look up the suggested OCR language for a detected script.
pub fn ocr_language_for(script: &str) -> Option<&'static str> {
    OCR_LANGUAGE_HINTS
        .iter()
        .find(|(s, _)| *s == script)
        .map(|&(_, lang)| lang)
}

/// Display labels for the scripts a caller can select.
///
/// Sinhala is detectable but not offered for selection, matching the set
/// of script pairs the service is tested against.
pub const SCRIPT_LABELS: &[(&str, &str)] = &[
    ("Devanagari", "Devanagari (हिन्दी, मराठी, नेपाली)"),
    ("Bengali", "Bengali (বাংলা)"),
    ("Gurmukhi", "Gurmukhi (ਪੰਜਾਬੀ)"),
    ("Gujarati", "Gujarati (ગુજરાતી)"),
    ("Oriya", "Odia (ଓଡ଼ିଆ)"),
    ("Tamil", "Tamil (தமிழ்)"),
    ("Telugu", "Telugu (తెలుగు)"),
    ("Kannada", "Kannada (ಕನ್ನಡ)"),
    ("Malayalam", "Malayalam (മലയാളം)"),
    (DEFAULT_SCRIPT, "Roman (Latin) ISO/IAST"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_blocks_are_pairwise_disjoint() {
        for (i, a) in DEFAULT_CATALOG.iter().enumerate() {
            for b in &DEFAULT_CATALOG[i + 1..] {
                for &(alo, ahi) in a.blocks {
                    for &(blo, bhi) in b.blocks {
                        assert!(
                            ahi < blo || bhi < alo,
                            "{} and {} overlap: {:#X}-{:#X} vs {:#X}-{:#X}",
                            a.script,
                            b.script,
                            alo,
                            ahi,
                            blo,
                            bhi
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn every_catalog_script_has_a_language_hint() {
        for range in DEFAULT_CATALOG {
            assert!(
                ocr_language_for(range.script).is_some(),
                "no OCR language for {}",
                range.script
            );
        }
    }

    #[test]
    fn unknown_script_has_no_hint() {
        assert_eq!(ocr_language_for("Cyrillic"), None);
    }

    #[test]
    fn labels_cover_known_scripts() {
        for (code, _) in SCRIPT_LABELS {
            assert!(
                DEFAULT_CATALOG.iter().any(|r| r.script == *code),
                "label for unknown script {}",
                code
            );
        }
    }
}
