//! Per-language crisis phrase lists.
//!
//! Marker phrases indicating self-harm risk. Matching is literal substring
//! containment, so every phrase must be stored case-folded.

use crate::domain::language::SupportedLanguage;

/// English phrases, consulted for every message regardless of the
/// detected language.
pub const ENGLISH_FALLBACK: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "can't go on",
];

/// Crisis phrases for the given language.
pub fn phrases_for(language: SupportedLanguage) -> &'static [&'static str] {
    match language {
        SupportedLanguage::English => ENGLISH_FALLBACK,
        SupportedLanguage::Hindi => &[
            "आत्महत्या",
            "मरना चाहती हूं",
            "जीना नहीं चाहती",
            "खुद को नुकसान",
        ],
        SupportedLanguage::Tamil => &["தற்கொலை", "சாக வேண்டும்", "வாழ விருப்பமில்லை"],
        SupportedLanguage::Bengali => &["আত্মহত্যা", "মরতে চাই", "বাঁচতে ইচ্ছে করছে না"],
        SupportedLanguage::Telugu => &["ఆత్మహత్య", "చనిపోవాలని అనిపిస్తుంది"],
        SupportedLanguage::Marathi => &["आत्महत्या", "मरायचे वाटते"],
        SupportedLanguage::Gujarati => &["આત્મહત્યા", "મરવું છે"],
        SupportedLanguage::Kannada => &["ಆತ್ಮಹತ್ಯೆ", "ಸಾಯಬೇಕು ಅನಿಸುತ್ತೆ"],
        SupportedLanguage::Malayalam => &["ആത്മഹത്യ", "മരിക്കാൻ തോന്നുന്നു"],
        SupportedLanguage::Punjabi => &["ਖੁਦਕੁਸ਼ੀ", "ਮਰਨਾ ਚਾਹੁੰਦੀ ਹਾਂ"],
        SupportedLanguage::Urdu => &["خودکشی", "مرنا چاہتی ہوں"],
    }
}
