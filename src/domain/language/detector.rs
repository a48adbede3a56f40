//! Script-based language detection.
//!
//! Classifies text by testing for the presence of code points in the
//! Unicode block of each supported script, in a fixed priority order.
//! This is a cheap presence test, not a majority-script classifier:
//! mixed-script input resolves to the earliest-priority matching script,
//! regardless of which script dominates. Marathi shares Devanagari with
//! Hindi, so detection never produces it.

use super::SupportedLanguage;

/// One detection rule: a language and the code-point ranges of its script.
struct ScriptRule {
    language: SupportedLanguage,
    blocks: &'static [(char, char)],
}

/// Detection rules in priority order. First rule with any matching
/// code point wins.
const DETECTION_ORDER: &[ScriptRule] = &[
    // Devanagari
    ScriptRule {
        language: SupportedLanguage::Hindi,
        blocks: &[('\u{0900}', '\u{097F}')],
    },
    // Tamil
    ScriptRule {
        language: SupportedLanguage::Tamil,
        blocks: &[('\u{0B80}', '\u{0BFF}')],
    },
    // Bengali
    ScriptRule {
        language: SupportedLanguage::Bengali,
        blocks: &[('\u{0980}', '\u{09FF}')],
    },
    // Telugu
    ScriptRule {
        language: SupportedLanguage::Telugu,
        blocks: &[('\u{0C00}', '\u{0C7F}')],
    },
    // Gujarati
    ScriptRule {
        language: SupportedLanguage::Gujarati,
        blocks: &[('\u{0A80}', '\u{0AFF}')],
    },
    // Kannada
    ScriptRule {
        language: SupportedLanguage::Kannada,
        blocks: &[('\u{0C80}', '\u{0CFF}')],
    },
    // Malayalam
    ScriptRule {
        language: SupportedLanguage::Malayalam,
        blocks: &[('\u{0D00}', '\u{0D7F}')],
    },
    // Gurmukhi
    ScriptRule {
        language: SupportedLanguage::Punjabi,
        blocks: &[('\u{0A00}', '\u{0A7F}')],
    },
    // Arabic + Arabic Supplement
    ScriptRule {
        language: SupportedLanguage::Urdu,
        blocks: &[('\u{0600}', '\u{06FF}'), ('\u{0750}', '\u{077F}')],
    },
];

/// Detects the language of `text`.
///
/// Returns `English` when no recognized script is present. Callers must
/// guarantee non-empty input; empty text trivially falls through to
/// `English`.
pub fn detect(text: &str) -> SupportedLanguage {
    for rule in DETECTION_ORDER {
        let hit = text.chars().any(|c| {
            rule.blocks
                .iter()
                .any(|&(start, end)| c >= start && c <= end)
        });
        if hit {
            return rule.language;
        }
    }
    SupportedLanguage::English
}
