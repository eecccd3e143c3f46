//! Upload analysis pipeline: file type check → text extraction → skill match.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_upload, FileKind};
use crate::skills::matcher::{match_resume, MatchReport};
use crate::skills::vocabulary::SkillVocabulary;

/// Non-fatal findings attached to a successful analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisWarning {
    NoSkillsExtracted,
    UnknownRole,
}

impl AnalysisWarning {
    pub fn message(self) -> &'static str {
        match self {
            AnalysisWarning::NoSkillsExtracted => {
                "Could not extract skills from resume. Please ensure your resume contains clear skill mentions."
            }
            AnalysisWarning::UnknownRole => {
                "Unrecognised job role; compared against a general skill list instead."
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub file_kind: FileKind,
    pub report: MatchReport,
    pub warnings: Vec<AnalysisWarning>,
}

/// Runs the full pipeline for one uploaded résumé.
///
/// Fails with `UnsupportedFileType` before touching the bytes, `Parse` on a corrupt
/// document, and `EmptyContent` when the extracted text is blank.
pub async fn analyze_resume(
    filename: &str,
    bytes: Bytes,
    role: &str,
    vocabulary: &SkillVocabulary,
) -> Result<Analysis, AppError> {
    let file_kind = FileKind::from_filename(filename)?;
    let text = extract_upload(bytes, file_kind).await?;

    if text.trim().is_empty() {
        warn!("Upload '{filename}' produced no text");
        return Err(AppError::EmptyContent);
    }

    let report = match_resume(&text, role, vocabulary)?;

    let mut warnings = Vec::new();
    if report.extracted_skills.is_empty() {
        warnings.push(AnalysisWarning::NoSkillsExtracted);
    }
    if !report.role_recognized {
        warnings.push(AnalysisWarning::UnknownRole);
    }

    info!(
        "Analyzed {:?} resume for role '{}': {} skills extracted, score {}",
        file_kind,
        report.role,
        report.extracted_skills.len(),
        report.score
    );

    Ok(Analysis {
        file_kind,
        report,
        warnings,
    })
}
