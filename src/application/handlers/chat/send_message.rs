//! SendMessage command handler - the conversation orchestrator.
//!
//! Routes each incoming message down one of two paths: the deterministic
//! crisis path (scripted safety response, no generator involvement) or the
//! supportive path (composed instruction handed to the text generator).
//! Either way the exchange is appended to the session transcript, except
//! when the generator fails, in which case nothing is recorded and a
//! generic fallback goes back to the caller.

use std::sync::Arc;

use crate::domain::conversation::ConversationEntry;
use crate::domain::foundation::SessionId;
use crate::domain::language::{detect, SupportedLanguage};
use crate::domain::response::{crisis_message, support_prompt};
use crate::domain::screening::is_emergency;
use crate::ports::{SessionStore, TextGenerator};

/// Generic caller-safe reply when generation fails. The real error is
/// logged, never sent to the user.
pub const FALLBACK_MESSAGE: &str = "I'm here for you, even though I'm having a technical difficulty. Please reach out to a healthcare provider if you need immediate support.";

/// Command to process one user message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// The session this message belongs to.
    pub session_id: SessionId,
    /// The raw user text. Callers must guarantee it is non-empty.
    pub message: String,
    /// Optional user display name.
    pub user_name: Option<String>,
}

impl SendMessageCommand {
    /// Creates a new send message command.
    pub fn new(
        session_id: SessionId,
        message: impl Into<String>,
        user_name: Option<String>,
    ) -> Self {
        Self {
            session_id,
            message: message.into(),
            user_name,
        }
    }
}

/// Outcome of processing one message.
///
/// Always well-formed: callers receive this even when generation fails,
/// with `success = false` and a generic fallback response.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Whether the message was processed and recorded.
    pub success: bool,
    /// The response text to show the user.
    pub response: String,
    /// Language the message was classified as.
    pub detected_language: SupportedLanguage,
    /// Whether the crisis path produced the response.
    pub is_emergency: bool,
    /// The session the message belongs to.
    pub session_id: SessionId,
    /// Internal error description on failure, for boundary logging.
    pub error: Option<String>,
}

/// Handler for SendMessage commands.
pub struct SendMessageHandler {
    sessions: Arc<dyn SessionStore>,
    generator: Arc<dyn TextGenerator>,
}

impl SendMessageHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(sessions: Arc<dyn SessionStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            sessions,
            generator,
        }
    }

    /// Processes one user message.
    ///
    /// Crisis-flagged messages get the scripted safety response and never
    /// touch the generator, so that path cannot fail on an external
    /// service. Generator failures on the supportive path are recovered
    /// into a fallback outcome; the transcript is left unchanged.
    pub async fn handle(&self, cmd: SendMessageCommand) -> ChatOutcome {
        let language = detect(&cmd.message);

        if is_emergency(&cmd.message, language) {
            tracing::warn!(
                session_id = %cmd.session_id,
                language = %language,
                "crisis phrase detected, returning scripted safety response"
            );
            return self.crisis_path(cmd, language).await;
        }

        tracing::debug!(
            session_id = %cmd.session_id,
            language = %language,
            "composing supportive instruction"
        );
        self.supportive_path(cmd, language).await
    }

    async fn crisis_path(
        &self,
        cmd: SendMessageCommand,
        language: SupportedLanguage,
    ) -> ChatOutcome {
        let response = crisis_message(language);

        match self.record(&cmd, language, response, true).await {
            Ok(()) => ChatOutcome {
                success: true,
                response: response.to_string(),
                detected_language: language,
                is_emergency: true,
                session_id: cmd.session_id,
                error: None,
            },
            Err(description) => self.failure(language, cmd.session_id, description),
        }
    }

    async fn supportive_path(
        &self,
        cmd: SendMessageCommand,
        language: SupportedLanguage,
    ) -> ChatOutcome {
        let prompt = support_prompt(language, &cmd.message, cmd.user_name.as_deref());

        let reply = match self.generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::error!(
                    session_id = %cmd.session_id,
                    error = %error,
                    "text generation failed"
                );
                return self.failure(language, cmd.session_id, error.to_string());
            }
        };

        match self.record(&cmd, language, &reply, false).await {
            Ok(()) => ChatOutcome {
                success: true,
                response: reply,
                detected_language: language,
                is_emergency: false,
                session_id: cmd.session_id,
                error: None,
            },
            Err(description) => self.failure(language, cmd.session_id, description),
        }
    }

    async fn record(
        &self,
        cmd: &SendMessageCommand,
        language: SupportedLanguage,
        response: &str,
        emergency: bool,
    ) -> Result<(), String> {
        let entry = ConversationEntry::new(
            cmd.message.clone(),
            language,
            response,
            emergency,
            cmd.user_name.clone(),
        )
        .map_err(|e| e.to_string())?;

        self.sessions
            .append(&cmd.session_id, entry)
            .await
            .map_err(|e| {
                tracing::error!(
                    session_id = %cmd.session_id,
                    error = %e,
                    "failed to append conversation entry"
                );
                e.to_string()
            })
    }

    fn failure(
        &self,
        language: SupportedLanguage,
        session_id: SessionId,
        description: String,
    ) -> ChatOutcome {
        ChatOutcome {
            success: false,
            response: FALLBACK_MESSAGE.to_string(),
            detected_language: language,
            // Unknown at this point; the message was already screened as
            // non-crisis before the generator was called.
            is_emergency: false,
            session_id,
            error: Some(description),
        }
    }
}
