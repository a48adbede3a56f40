//! Supported language tags.
//!
//! A closed set of eleven languages the service can recognize and answer in.
//! Detection always resolves to exactly one tag, defaulting to English.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language the service supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    Hindi,
    Tamil,
    Bengali,
    Telugu,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Urdu,
    English,
}

impl SupportedLanguage {
    /// All supported languages, in a stable presentation order.
    pub const ALL: [SupportedLanguage; 11] = [
        SupportedLanguage::Hindi,
        SupportedLanguage::Tamil,
        SupportedLanguage::Bengali,
        SupportedLanguage::Telugu,
        SupportedLanguage::Marathi,
        SupportedLanguage::Gujarati,
        SupportedLanguage::Kannada,
        SupportedLanguage::Malayalam,
        SupportedLanguage::Punjabi,
        SupportedLanguage::Urdu,
        SupportedLanguage::English,
    ];

    /// Lowercase tag used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::Hindi => "hindi",
            SupportedLanguage::Tamil => "tamil",
            SupportedLanguage::Bengali => "bengali",
            SupportedLanguage::Telugu => "telugu",
            SupportedLanguage::Marathi => "marathi",
            SupportedLanguage::Gujarati => "gujarati",
            SupportedLanguage::Kannada => "kannada",
            SupportedLanguage::Malayalam => "malayalam",
            SupportedLanguage::Punjabi => "punjabi",
            SupportedLanguage::Urdu => "urdu",
            SupportedLanguage::English => "english",
        }
    }

    /// Native display name, shown to users and used in prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportedLanguage::Hindi => "हिंदी",
            SupportedLanguage::Tamil => "தமிழ்",
            SupportedLanguage::Bengali => "বাংলা",
            SupportedLanguage::Telugu => "తెలుగు",
            SupportedLanguage::Marathi => "मराठी",
            SupportedLanguage::Gujarati => "ગુજરાતી",
            SupportedLanguage::Kannada => "ಕನ್ನಡ",
            SupportedLanguage::Malayalam => "മലയാളം",
            SupportedLanguage::Punjabi => "ਪੰਜਾਬੀ",
            SupportedLanguage::Urdu => "اردو",
            SupportedLanguage::English => "English",
        }
    }
}

impl Default for SupportedLanguage {
    fn default() -> Self {
        SupportedLanguage::English
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_eleven_languages() {
        assert_eq!(SupportedLanguage::ALL.len(), 11);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = SupportedLanguage::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 11);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(SupportedLanguage::default(), SupportedLanguage::English);
    }

    #[test]
    fn serializes_to_lowercase_code() {
        let json = serde_json::to_string(&SupportedLanguage::Hindi).unwrap();
        assert_eq!(json, "\"hindi\"");

        let json = serde_json::to_string(&SupportedLanguage::Malayalam).unwrap();
        assert_eq!(json, "\"malayalam\"");
    }

    #[test]
    fn deserializes_from_lowercase_code() {
        let lang: SupportedLanguage = serde_json::from_str("\"urdu\"").unwrap();
        assert_eq!(lang, SupportedLanguage::Urdu);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(SupportedLanguage::Punjabi.to_string(), "punjabi");
    }

    #[test]
    fn english_display_name_is_latin() {
        assert_eq!(SupportedLanguage::English.display_name(), "English");
        assert_eq!(SupportedLanguage::Hindi.display_name(), "हिंदी");
    }
}
