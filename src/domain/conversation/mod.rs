//! Conversation records.

mod entry;

pub use entry::{ConversationEntry, EntryId};
