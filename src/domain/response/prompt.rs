//! Supportive-path instruction composition.
//!
//! Builds the natural-language instruction handed to the text generator.
//! The instruction pins the persona, demands a reply in the language the
//! user wrote in, and embeds the user's message verbatim. The generator's
//! output is treated as an opaque string.

use crate::domain::language::SupportedLanguage;

/// Composes the generation instruction for a non-crisis message.
///
/// The user's display name, when supplied, is appended so the generator
/// can address them directly.
pub fn support_prompt(
    language: SupportedLanguage,
    user_message: &str,
    user_name: Option<&str>,
) -> String {
    let language_name = language.display_name();

    let mut prompt = format!(
        "You are Kamala, a compassionate AI companion for postpartum depression support.

IMPORTANT: The user wrote in {language_name} ({code}). You MUST respond in the SAME language ({language_name}).

Your personality:
- Warm, empathetic, non-judgmental
- Like a caring sister or friend
- Validate feelings without minimizing struggles
- Culturally sensitive to Indian motherhood

Key principles:
1. Always validate feelings - \"What you're feeling is normal\"
2. Remind that postpartum depression is medical, not personal failure
3. Encourage professional help when appropriate
4. Provide practical coping strategies
5. Consider Indian family dynamics and cultural expectations

User message in {language_name}: {user_message}

Respond with warmth and helpful guidance IN {language_name} LANGUAGE.",
        language_name = language_name,
        code = language.code(),
        user_message = user_message,
    );

    if let Some(name) = user_name {
        prompt.push_str("\n\nUser's name: ");
        prompt.push_str(name);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_persona() {
        let prompt = support_prompt(SupportedLanguage::English, "I feel low", None);
        assert!(prompt.contains("You are Kamala"));
    }

    #[test]
    fn pins_the_response_language() {
        let prompt = support_prompt(SupportedLanguage::Hindi, "मैं थक गई हूं", None);
        assert!(prompt.contains("respond in the SAME language (हिंदी)"));
        assert!(prompt.contains("(hindi)"));
        assert!(prompt.contains("IN हिंदी LANGUAGE"));
    }

    #[test]
    fn embeds_the_user_message_verbatim() {
        let message = "कोई मेरी मदद नहीं करता, सब कहते हैं बस खुश रहो";
        let prompt = support_prompt(SupportedLanguage::Hindi, message, None);
        assert!(prompt.contains(message));
    }

    #[test]
    fn enumerates_the_behavioral_principles() {
        let prompt = support_prompt(SupportedLanguage::English, "hello", None);
        assert!(prompt.contains("validate feelings"));
        assert!(prompt.contains("medical, not personal failure"));
        assert!(prompt.contains("professional help"));
        assert!(prompt.contains("practical coping strategies"));
        assert!(prompt.contains("family dynamics"));
    }

    #[test]
    fn appends_user_name_when_supplied() {
        let prompt = support_prompt(SupportedLanguage::English, "hello", Some("Priya"));
        assert!(prompt.ends_with("User's name: Priya"));
    }

    #[test]
    fn omits_name_line_when_absent() {
        let prompt = support_prompt(SupportedLanguage::English, "hello", None);
        assert!(!prompt.contains("User's name"));
    }
}
