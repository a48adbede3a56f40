//! HTTP adapter - REST API for the chat service.
//!
//! Pure pass-throughs to the application layer; no decision logic lives
//! here beyond input validation.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, EntryView, HistoryResponse};
pub use handlers::{ApiError, AppState};
pub use routes::{api_router, api_routes};
