use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthSession;
use crate::chat::answer;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub query: String,
    pub response: String,
}

/// POST /api/v1/chat
///
/// Remote failures still return 200 with a fallback reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    _auth: AuthSession,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::Validation("Please enter a query.".to_string()));
    }

    let response = answer(state.completion.as_ref(), &req.query).await;

    Ok(Json(ChatResponse {
        query: req.query,
        response,
    }))
}
