//! Pre-authored crisis responses.
//!
//! These messages are returned verbatim on the emergency path. They never
//! pass through the text generator, so their availability cannot depend on
//! an external service. Languages without a localized template fall back
//! to the English version.

use crate::domain::language::SupportedLanguage;

const ENGLISH: &str = "I'm very concerned about what you're going through right now. Your feelings are valid, but please know that you don't have to face this alone.

🆘 IMMEDIATE HELP:
• National Suicide Prevention Helpline: 9152987821
• AASRA: 91-22-27546669
• iCall: 9152987821

Please reach out to a trusted family member, friend, or healthcare provider right now. You and your baby need you here. This difficult time will pass, and there is help available.";

const HINDI: &str = "मुझे आपकी स्थिति की बहुत चिंता है। आपकी भावनाएं सही हैं, लेकिन कृपया जानें कि आपको अकेले इससे निपटना नहीं है।

🆘 तत्काल सहायता:
• राष्ट्रीय आत्महत्या रोकथाम हेल्पलाइन: 9152987821
• आसरा: 91-22-27546669

कृपया अभी किसी विश्वसनीय परिवारजन, मित्र या डॉक्टर से संपर्क करें। आप और आपका बच्चा दोनों आपकी जरूरत है।";

const TAMIL: &str = "நீங்கள் அனுபவிக்கும் வலியைப் பற்றி எனக்கு மிகவும் கவலையாக உள்ளது। உங்கள் உணர்வுகள் சரியானவை, ஆனால் நீங்கள் தனியாக இதை எதிர்கொள்ள வேண்டியதில்லை.

🆘 உடனடி உதவி:
• தேசிய தற்கொலை தடுப்பு உதவி எண்: 9152987821
• ஆஸ்ரா: 91-22-27546669

உடனே நம்பகமான குடும்ப உறுப்பினர், நண்பர் அல்லது மருத்துவரை தொடர்பு கொள்ளுங்கள்.";

/// The crisis response for the given language, falling back to English.
pub fn crisis_message(language: SupportedLanguage) -> &'static str {
    match language {
        SupportedLanguage::Hindi => HINDI,
        SupportedLanguage::Tamil => TAMIL,
        _ => ENGLISH,
    }
}

/// True if a localized template exists for the language.
pub fn has_localized_template(language: SupportedLanguage) -> bool {
    matches!(
        language,
        SupportedLanguage::English | SupportedLanguage::Hindi | SupportedLanguage::Tamil
    )
}
