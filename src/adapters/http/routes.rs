//! Axum routes for the chat API.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    chat, conversation_history, health, languages, resources, AppState,
};

/// Creates routes for the chat API.
///
/// Endpoints:
/// - POST /chat - Classify a message and produce a response
/// - GET /conversation/{session_id} - Retrieve a session transcript
/// - GET /languages - List supported languages
/// - GET /resources - Curated helpline and self-care data
/// - GET /health - Liveness probe
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/conversation/{session_id}", get(conversation_history))
        .route("/languages", get(languages))
        .route("/resources", get(resources))
        .route("/health", get(health))
}

/// Router with the given state applied.
pub fn api_router(state: AppState) -> Router {
    api_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_routes_creates_valid_router() {
        let _routes = api_routes();
    }
}
