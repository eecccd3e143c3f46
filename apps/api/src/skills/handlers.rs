//! Axum route handlers for résumé analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::warn;

use crate::auth::extractor::AuthSession;
use crate::errors::AppError;
use crate::extraction::FileKind;
use crate::skills::analysis::{analyze_resume, AnalysisWarning};
use crate::skills::matcher::{ChartData, MatchReport};
use crate::skills::recommendation::{build_recommendation, Recommendation};
use crate::skills::vocabulary::RoleProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct WarningBody {
    pub code: AnalysisWarning,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_type: FileKind,
    pub report: MatchReport,
    pub chart: ChartData,
    pub warnings: Vec<WarningBody>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: MatchReport,
    pub chart: ChartData,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleProfile>,
}

/// Fields collected from the upload form.
#[derive(Default)]
struct UploadForm {
    target_job_role: Option<String>,
    resume: Option<(String, Bytes)>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("target_job_role") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable job role: {e}")))?;
                form.target_job_role = Some(value);
            }
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file: {e}")))?;
                form.resume = Some((filename, data));
            }
            _ => {}
        }
    }

    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.vocabulary.roles().to_vec(),
    })
}

/// POST /api/v1/resume/upload
///
/// Multipart form with a `resume` file and a `target_job_role` text field.
/// On success the match report is stored in the caller's session.
pub async fn handle_upload(
    State(state): State<AppState>,
    auth: AuthSession,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let role = form
        .target_job_role
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Please select a target job role.".to_string()))?;

    let (filename, data) = form
        .resume
        .ok_or_else(|| AppError::Validation("No file part".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }

    let analysis = match analyze_resume(&filename, data, &role, &state.vocabulary).await {
        Ok(a) => a,
        Err(e) => {
            warn!(user = %auth.session.username, "Upload '{filename}' rejected: {e}");
            return Err(e);
        }
    };

    let stored = state
        .sessions
        .store_analysis(auth.token, analysis.report.clone())
        .await;
    if !stored {
        warn!(user = %auth.session.username, "Session ended before the analysis could be stored");
        return Err(AppError::Unauthorized);
    }

    Ok(Json(UploadResponse {
        file_type: analysis.file_kind,
        chart: analysis.report.chart(),
        report: analysis.report,
        warnings: analysis
            .warnings
            .into_iter()
            .map(|w| WarningBody {
                code: w,
                message: w.message(),
            })
            .collect(),
    }))
}

/// GET /api/v1/resume/report
pub async fn handle_get_report(auth: AuthSession) -> Result<Json<ReportResponse>, AppError> {
    let report = stored_report(auth)?;
    Ok(Json(ReportResponse {
        chart: report.chart(),
        report,
    }))
}

/// GET /api/v1/resume/recommendations
pub async fn handle_get_recommendations(
    auth: AuthSession,
) -> Result<Json<Recommendation>, AppError> {
    let report = stored_report(auth)?;
    Ok(Json(build_recommendation(&report)))
}

fn stored_report(auth: AuthSession) -> Result<MatchReport, AppError> {
    auth.session
        .analysis
        .ok_or_else(|| AppError::NotFound("No resume has been analyzed in this session".to_string()))
}
