//! API request handlers
use std::sync::Arc;

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tracing::error;
use tracing::info;

use crate::api::page;
use crate::api::types::ApiResponse;
use crate::api::types::ChatRequest;
use crate::api::types::HealthResponse;
use crate::api::types::PageQuery;
use crate::errors::RagChatError;
use crate::memory::ConversationMemory;
use crate::memory::Turn;
use crate::rag::ChatBot;
use crate::rag::ChatReply;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub chatbot: Arc<ChatBot>,
    /// The one conversation this process holds. A turn keeps the lock for its
    /// whole duration, so turns never interleave.
    pub memory: Arc<Mutex<ConversationMemory>>,
    /// Copy of the recorded turns, refreshed after each turn. Readers never
    /// wait on a turn in progress.
    pub history: Arc<RwLock<Vec<Turn>>>,
}

impl AppState {
    pub fn new(chatbot: ChatBot) -> Self {
        Self {
            chatbot: Arc::new(chatbot),
            memory: Arc::new(Mutex::new(ConversationMemory::new())),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    async fn run_turn(&self, input: &str) -> crate::Result<ChatReply> {
        let mut memory = self.memory.lock().await;
        let reply = self.chatbot.chat(input, &mut memory).await?;
        *self.history.write().await = memory.turns().to_vec();
        Ok(reply)
    }
}

/// Failure of a page request, shown as the generic error page
pub struct PageError(RagChatError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(page::render_error_page(&self.0.to_string())),
        )
            .into_response()
    }
}

/// Chat page (GET /). A non-empty `user_input` runs one turn.
pub async fn chat_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let input = query.user_input.unwrap_or_default();
    if input.is_empty() {
        return Ok(Html(page::render_chat_page("", None)));
    }

    info!("GET /: {}", input);
    match state.run_turn(&input).await {
        Ok(reply) => Ok(Html(page::render_chat_page(&input, Some(&reply)))),
        Err(e) => {
            error!("Error processing chat turn: {}", e);
            Err(PageError(e))
        }
    }
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Chat turn (POST /api/chat)
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse<ChatReply>>) {
    info!("POST /api/chat: {}", req.message);

    match state.run_turn(&req.message).await {
        Ok(reply) => (StatusCode::OK, Json(ApiResponse::success(reply))),
        Err(e) => {
            error!("Error processing chat turn: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        }
    }
}

/// Conversation so far (GET /api/history), as of the last completed turn
pub async fn history(State(state): State<AppState>) -> Json<ApiResponse<Vec<Turn>>> {
    let turns = state.history.read().await.clone();
    Json(ApiResponse::success(turns))
}
