//! HTTP handlers for the chat API.
//!
//! These handlers connect axum routes to the application layer. Input
//! validation (empty message, malformed session id) is rejected here with
//! 400 before anything reaches the core.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::chat::{
    GetHistoryHandler, SendMessageCommand, SendMessageHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::language::SupportedLanguage;
use crate::domain::response::CURATED;
use crate::ports::{SessionStore, TextGenerator};

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, HistoryResponse,
    LanguageView, LanguagesResponse, ResourcesResponse, ResourcesView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the chat API.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<SendMessageHandler>,
    pub history: Arc<GetHistoryHandler>,
}

impl AppState {
    /// Wires the handlers from the injected ports.
    pub fn new(sessions: Arc<dyn SessionStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            chat: Arc::new(SendMessageHandler::new(Arc::clone(&sessions), generator)),
            history: Arc::new(GetHistoryHandler::new(sessions)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// API Error
// ════════════════════════════════════════════════════════════════════════════════

/// Errors surfaced by the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request was malformed or missing required fields.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(message)),
            )
                .into_response(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /chat - Classify a message and produce a response.
///
/// Always answers 200 with a well-formed result object; generation
/// failures carry `success = false` and a generic fallback message.
///
/// # Errors
/// - 400 Bad Request: missing/empty message, or empty session id
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    }

    let session_id = SessionId::new(request.session_id)
        .map_err(|_| ApiError::BadRequest("Invalid session ID".to_string()))?;

    let outcome = state
        .chat
        .handle(SendMessageCommand::new(
            session_id,
            message,
            request.user_name,
        ))
        .await;

    Ok((StatusCode::OK, Json(ChatResponse::from(outcome))))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /conversation/{session_id}
// ════════════════════════════════════════════════════════════════════════════════

/// GET /conversation/{session_id} - Retrieve a session transcript.
///
/// Unknown sessions yield an empty conversation, not an error.
///
/// # Errors
/// - 400 Bad Request: empty session id
pub async fn conversation_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = SessionId::new(session_id)
        .map_err(|_| ApiError::BadRequest("Invalid session ID".to_string()))?;

    let entries = state.history.handle(&session_id).await;

    let response = HistoryResponse {
        success: true,
        session_id: session_id.to_string(),
        conversation: entries.iter().map(Into::into).collect(),
    };
    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /languages
// ════════════════════════════════════════════════════════════════════════════════

/// GET /languages - List the supported languages.
pub async fn languages() -> impl IntoResponse {
    let response = LanguagesResponse {
        success: true,
        languages: SupportedLanguage::ALL
            .into_iter()
            .map(LanguageView::from)
            .collect(),
    };
    (StatusCode::OK, Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /resources
// ════════════════════════════════════════════════════════════════════════════════

/// GET /resources - Curated helpline and self-care data.
pub async fn resources() -> impl IntoResponse {
    let response = ResourcesResponse {
        success: true,
        resources: ResourcesView::from(&CURATED),
    };
    (StatusCode::OK, Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /health
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: "Kamala Chatbot API",
        }),
    )
}
