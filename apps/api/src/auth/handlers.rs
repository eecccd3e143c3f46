//! Axum route handlers for registration, login and the session dashboard.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthSession;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub username: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
    pub has_analysis: bool,
    pub selected_job_role: Option<String>,
    pub resume_score: Option<f64>,
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    state.identity.register(&req.username, &req.password).await?;
    info!("Registered user '{}'", req.username.trim());
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            username: req.username.trim().to_string(),
            message: "Registration successful! Please log in.",
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = state.identity.verify(&req.username, &req.password).await?;
    let token = state.sessions.create(&username).await;
    info!("User '{username}' logged in");
    Ok(Json(LoginResponse { token, username }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>, auth: AuthSession) -> StatusCode {
    state.sessions.remove(auth.token).await;
    info!("User '{}' logged out", auth.session.username);
    StatusCode::NO_CONTENT
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(auth: AuthSession) -> Json<DashboardResponse> {
    let session = auth.session;
    Json(DashboardResponse {
        username: session.username,
        logged_in_at: session.created_at,
        has_analysis: session.analysis.is_some(),
        selected_job_role: session.analysis.as_ref().map(|r| r.role.clone()),
        resume_score: session.analysis.as_ref().map(|r| r.score),
    })
}
