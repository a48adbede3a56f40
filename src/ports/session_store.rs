//! Session Store Port - per-session transcript registry.
//!
//! The store is an explicit, injectable service owned by the orchestrator's
//! construction scope, not process-wide ambient state. Transcripts are
//! append-only and live for the lifetime of the process.

use async_trait::async_trait;

use crate::domain::conversation::ConversationEntry;
use crate::domain::foundation::{DomainError, SessionId};

/// Port for transcript persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Appends an entry to the session's transcript, creating the
    /// transcript on first use. Insertion order is preserved; entries are
    /// never removed or reordered.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the backing store fails.
    async fn append(
        &self,
        session_id: &SessionId,
        entry: ConversationEntry,
    ) -> Result<(), DomainError>;

    /// Returns the session's transcript in insertion order, or an empty
    /// sequence for a session that has never been seen. Never an error.
    async fn history(&self, session_id: &SessionId) -> Vec<ConversationEntry>;
}
