//! Conversation entry record.
//!
//! One exchange between the user and the service: the raw user text, the
//! detected language, the response that went back, and whether the crisis
//! path produced it. Entries are created exactly once per user message,
//! appended to the owning transcript, and never mutated or deleted.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::language::SupportedLanguage;

/// Unique identifier for a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new random EntryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable record of one exchange.
///
/// # Invariants
///
/// - `user_input` is non-empty (validated at construction)
/// - `timestamp` is set at construction and never changes
/// - an entry with `is_emergency` carries the crisis template as its response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    id: EntryId,
    timestamp: Timestamp,
    user_input: String,
    detected_language: SupportedLanguage,
    response: String,
    is_emergency: bool,
    user_name: Option<String>,
}

impl ConversationEntry {
    /// Creates a new entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the user input is empty
    pub fn new(
        user_input: impl Into<String>,
        detected_language: SupportedLanguage,
        response: impl Into<String>,
        is_emergency: bool,
        user_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let user_input = user_input.into();
        if user_input.trim().is_empty() {
            return Err(DomainError::validation(
                "user_input",
                "User input cannot be empty",
            ));
        }

        Ok(Self {
            id: EntryId::new(),
            timestamp: Timestamp::now(),
            user_input,
            detected_language,
            response: response.into(),
            is_emergency,
            user_name,
        })
    }

    /// Returns the entry ID.
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Returns when the exchange happened.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns the raw user text.
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    /// Returns the detected language.
    pub fn detected_language(&self) -> SupportedLanguage {
        self.detected_language
    }

    /// Returns the response sent back to the user.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Returns true if the crisis path produced this entry.
    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    /// Returns the user's display name, if one was supplied.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_ids_are_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn new_preserves_all_fields() {
        let entry = ConversationEntry::new(
            "मैं ठीक नहीं हूं",
            SupportedLanguage::Hindi,
            "आप अकेली नहीं हैं।",
            false,
            Some("Priya".to_string()),
        )
        .unwrap();

        assert_eq!(entry.user_input(), "मैं ठीक नहीं हूं");
        assert_eq!(entry.detected_language(), SupportedLanguage::Hindi);
        assert_eq!(entry.response(), "आप अकेली नहीं हैं।");
        assert!(!entry.is_emergency());
        assert_eq!(entry.user_name(), Some("Priya"));
    }

    #[test]
    fn user_name_is_optional() {
        let entry = ConversationEntry::new(
            "hello",
            SupportedLanguage::English,
            "hi",
            false,
            None,
        )
        .unwrap();
        assert_eq!(entry.user_name(), None);
    }

    #[test]
    fn rejects_empty_user_input() {
        let result =
            ConversationEntry::new("", SupportedLanguage::English, "hi", false, None);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_whitespace_only_user_input() {
        let result =
            ConversationEntry::new("  \n ", SupportedLanguage::English, "hi", false, None);
        assert!(result.is_err());
    }

    #[test]
    fn sets_timestamp_at_construction() {
        let entry = ConversationEntry::new(
            "hello",
            SupportedLanguage::English,
            "hi",
            false,
            None,
        )
        .unwrap();
        let now = Timestamp::now();
        assert!(entry.timestamp().as_datetime() <= now.as_datetime());
    }
}
