//! In-memory session store.
//!
//! Process-lifetime transcript registry backed by a `HashMap` behind a
//! `tokio::sync::RwLock`. The write lock serializes appends, so transcript
//! order matches append order even under concurrent requests for the same
//! session. All data is volatile and lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationEntry;
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionStore;

/// In-memory implementation of the SessionStore port.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Vec<ConversationEntry>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with at least one entry.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn append(
        &self,
        session_id: &SessionId,
        entry: ConversationEntry,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.entry(session_id.clone()).or_default().push(entry);
        Ok(())
    }

    async fn history(&self, session_id: &SessionId) -> Vec<ConversationEntry> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }
}
