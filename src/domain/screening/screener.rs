//! Crisis-risk screening.
//!
//! Flags messages containing crisis phrases before any generation happens.
//! Matching is substring containment with no word boundaries: a phrase
//! inside a larger word still counts. High recall over precision is the
//! point here; a false positive costs a scripted safety message, a false
//! negative costs much more.

use crate::domain::language::SupportedLanguage;

use super::lexicon;

/// Returns true if `text` contains a crisis phrase.
///
/// Checks the phrase list for `language` first, then the English fallback
/// list regardless of language. Input is case-folded before matching;
/// lexicon phrases are stored case-folded.
pub fn is_emergency(text: &str, language: SupportedLanguage) -> bool {
    let folded = text.to_lowercase();

    let contains_any =
        |phrases: &[&str]| phrases.iter().any(|phrase| folded.contains(phrase));

    contains_any(lexicon::phrases_for(language)) || contains_any(lexicon::ENGLISH_FALLBACK)
}
