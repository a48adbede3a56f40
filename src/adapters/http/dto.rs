//! HTTP DTOs for the chat API.
//!
//! These types decouple the wire format from domain types. Field names
//! stay snake_case to match the mobile client's expectations.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::ChatOutcome;
use crate::domain::conversation::ConversationEntry;
use crate::domain::language::SupportedLanguage;
use crate::domain::response::{Helpline, SupportResources};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of POST /chat.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message. Required and non-empty.
    #[serde(default)]
    pub message: Option<String>,
    /// Session identifier; callers without one land in "default".
    #[serde(default = "default_session_id")]
    pub session_id: String,
    /// Optional display name used to personalize replies.
    #[serde(default)]
    pub user_name: Option<String>,
}

fn default_session_id() -> String {
    "default".to_string()
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of the POST /chat response.
///
/// Always returned with status 200, including generation failures, which
/// carry `success = false` and a generic fallback response.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub detected_language: SupportedLanguage,
    pub is_emergency: bool,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        Self {
            success: outcome.success,
            response: outcome.response,
            detected_language: outcome.detected_language,
            is_emergency: outcome.is_emergency,
            session_id: outcome.session_id.to_string(),
            error: outcome.error,
        }
    }
}

/// View of one transcript entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub timestamp: String,
    pub user_input: String,
    pub detected_language: SupportedLanguage,
    pub bot_response: String,
    pub is_emergency: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl From<&ConversationEntry> for EntryView {
    fn from(entry: &ConversationEntry) -> Self {
        Self {
            timestamp: entry.timestamp().to_rfc3339(),
            user_input: entry.user_input().to_string(),
            detected_language: entry.detected_language(),
            bot_response: entry.response().to_string(),
            is_emergency: entry.is_emergency(),
            user_name: entry.user_name().map(str::to_string),
        }
    }
}

/// Body of the GET /conversation/{session_id} response.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub session_id: String,
    pub conversation: Vec<EntryView>,
}

/// One supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageView {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<SupportedLanguage> for LanguageView {
    fn from(language: SupportedLanguage) -> Self {
        Self {
            code: language.code(),
            name: language.display_name(),
        }
    }
}

/// Body of the GET /languages response.
#[derive(Debug, Clone, Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: Vec<LanguageView>,
}

/// One helpline contact.
#[derive(Debug, Clone, Serialize)]
pub struct HelplineView {
    pub name: &'static str,
    pub number: &'static str,
}

impl From<&Helpline> for HelplineView {
    fn from(helpline: &Helpline) -> Self {
        Self {
            name: helpline.name,
            number: helpline.number,
        }
    }
}

/// Curated resource data.
#[derive(Debug, Clone, Serialize)]
pub struct ResourcesView {
    pub helplines: Vec<HelplineView>,
    pub emergency_signs: Vec<&'static str>,
    pub self_care_tips: Vec<&'static str>,
}

impl From<&SupportResources> for ResourcesView {
    fn from(resources: &SupportResources) -> Self {
        Self {
            helplines: resources.helplines.iter().map(HelplineView::from).collect(),
            emergency_signs: resources.emergency_signs.to_vec(),
            self_care_tips: resources.self_care_tips.to_vec(),
        }
    }
}

/// Body of the GET /resources response.
#[derive(Debug, Clone, Serialize)]
pub struct ResourcesResponse {
    pub success: bool,
    pub resources: ResourcesView,
}

/// Body of the GET /health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
