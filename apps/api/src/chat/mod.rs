//! Career chatbot: one prompt out, one reply back.
//!
//! The generative backend sits behind `CompletionService` so handlers and tests
//! never depend on the network. `answer` never fails: every remote error becomes a
//! user-safe fallback message.

pub mod gemini;
pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::chat::prompts::{
    CHAT_PROMPT_PREFIX, FALLBACK_BLOCKED, FALLBACK_CONNECTION, FALLBACK_EMPTY,
    FALLBACK_NOT_CONFIGURED, FALLBACK_UNEXPECTED_FORMAT,
};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat completion is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response blocked: {0}")]
    Blocked(String),

    #[error("response contained no text candidate")]
    EmptyContent,
}

impl ChatError {
    /// Message safe to show the end user. Never includes remote error details.
    pub fn user_message(&self) -> &'static str {
        match self {
            ChatError::NotConfigured => FALLBACK_NOT_CONFIGURED,
            ChatError::Http(_) | ChatError::Api { .. } => FALLBACK_CONNECTION,
            ChatError::Parse(_) | ChatError::EmptyContent => FALLBACK_UNEXPECTED_FORMAT,
            ChatError::Blocked(_) => FALLBACK_BLOCKED,
        }
    }
}

/// A text-generation backend. Carried in `AppState` as `Arc<dyn CompletionService>`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

pub fn build_prompt(query: &str) -> String {
    format!("{CHAT_PROMPT_PREFIX}{query}")
}

/// Answers a user query. Always returns a non-empty reply.
pub async fn answer(service: &dyn CompletionService, query: &str) -> String {
    match service.complete(&build_prompt(query)).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Chat completion returned blank text");
            FALLBACK_EMPTY.to_string()
        }
        Err(e) => {
            warn!("Chat completion failed: {e}");
            e.user_message().to_string()
        }
    }
}
