//! Chat use-case handlers.

mod get_history;
mod send_message;

pub use get_history::GetHistoryHandler;
pub use send_message::{ChatOutcome, SendMessageCommand, SendMessageHandler, FALLBACK_MESSAGE};
