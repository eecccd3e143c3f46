pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::chat::handlers as chat;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Identity
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/dashboard", get(auth::handle_dashboard))
        // Résumé analysis
        .route("/api/v1/roles", get(skills::handle_list_roles))
        .route(
            "/api/v1/resume/upload",
            post(skills::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resume/report", get(skills::handle_get_report))
        .route(
            "/api/v1/resume/recommendations",
            get(skills::handle_get_recommendations),
        )
        // Chatbot
        .route("/api/v1/chat", post(chat::handle_chat))
        .with_state(state)
}
