use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::identity::IdentityError;
use crate::extraction::ExtractionError;
use crate::skills::matcher::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Could not parse file: {0}")]
    Parse(String),

    #[error("Extracted resume text is empty")]
    EmptyContent,

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::UnsupportedType(ext) => AppError::UnsupportedFileType(ext),
            ExtractionError::Parse(msg) => AppError::Parse(msg),
            ExtractionError::Worker(msg) => {
                AppError::Internal(anyhow::anyhow!("text extraction task failed: {msg}"))
            }
        }
    }
}

impl From<MatchError> for AppError {
    fn from(e: MatchError) -> Self {
        AppError::UnprocessableEntity(e.to_string())
    }
}

impl From<IdentityError> for AppError {
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::UsernameTaken(name) => {
                AppError::Conflict(format!("Username '{name}' already exists"))
            }
            IdentityError::InvalidCredentials => AppError::InvalidCredentials,
            IdentityError::EmptyField(field) => {
                AppError::Validation(format!("{field} cannot be empty"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFileType(ext) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE_TYPE",
                format!("Invalid file type '{ext}'. Allowed types: TXT, PDF, DOCX"),
            ),
            AppError::Parse(msg) => {
                tracing::warn!("Resume parse failure: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PARSE_ERROR",
                    "Could not extract text from the uploaded file. Please ensure it is a valid TXT, PDF, or DOCX."
                        .to_string(),
                )
            }
            AppError::EmptyContent => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_CONTENT",
                "Extracted resume text is empty. Please ensure your resume contains readable text."
                    .to_string(),
            ),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid username or password".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
