//! GetHistory query handler.

use std::sync::Arc;

use crate::domain::conversation::ConversationEntry;
use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Handler for transcript retrieval.
pub struct GetHistoryHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetHistoryHandler {
    /// Creates a new handler with the given store.
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Returns the transcript for `session_id` in insertion order, or an
    /// empty sequence for a session that has never been seen.
    pub async fn handle(&self, session_id: &SessionId) -> Vec<ConversationEntry> {
        self.sessions.history(session_id).await
    }
}
