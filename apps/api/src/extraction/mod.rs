//! Text extraction: turns an uploaded résumé (TXT, PDF or DOCX) into plain text.
//!
//! The file type is decided from the file name's suffix and checked before any
//! parsing happens. PDF and DOCX parsing are CPU-bound and run on the blocking pool.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("unsupported file type '{0}'")]
    UnsupportedType(String),

    #[error("{0}")]
    Parse(String),

    /// The blocking parse task panicked or was cancelled.
    #[error("extraction task failed: {0}")]
    Worker(String),
}

/// Supported résumé formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Txt,
    Pdf,
    Docx,
}

impl FileKind {
    /// Resolves the kind from a file name, using the suffix after the last dot.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        match filename.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Err(ExtractionError::UnsupportedType(String::new())),
        }
    }

    /// Case-insensitive extension lookup.
    pub fn from_extension(ext: &str) -> Result<Self, ExtractionError> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Ok(FileKind::Txt),
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            other => Err(ExtractionError::UnsupportedType(other.to_string())),
        }
    }
}

/// Extracts text from `bytes` already classified as `kind`.
///
/// Callers obtain `kind` from `FileKind::from_filename`, so unsupported files are
/// rejected before the bytes are looked at.
pub fn extract(bytes: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
    match kind {
        FileKind::Txt => Ok(decode_utf8_ignoring_invalid(bytes)),
        FileKind::Pdf => pdf::extract_pdf_text(bytes),
        FileKind::Docx => docx::extract_docx_text(bytes),
    }
}

/// Async wrapper used by the upload handler. Document parsing runs on the blocking pool.
pub async fn extract_upload(bytes: Bytes, kind: FileKind) -> Result<String, ExtractionError> {
    if kind == FileKind::Txt {
        return extract(&bytes, kind);
    }

    tokio::task::spawn_blocking(move || extract(&bytes, kind))
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
}

/// Decodes UTF-8, dropping any byte sequences that are not valid UTF-8.
fn decode_utf8_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(FileKind::from_filename("cv.PDF").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_filename("cv.Docx").unwrap(), FileKind::Docx);
        assert_eq!(FileKind::from_filename("my.resume.txt").unwrap(), FileKind::Txt);
    }

    #[test]
    fn test_unsupported_extension_rejected_before_parsing() {
        let err = FileKind::from_filename("resume.exe").unwrap_err();
        assert_eq!(err, ExtractionError::UnsupportedType("exe".to_string()));
    }

    #[test]
    fn test_filename_without_extension_is_unsupported() {
        assert!(matches!(
            FileKind::from_filename("resume"),
            Err(ExtractionError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_plain_text_drops_invalid_bytes() {
        let bytes = b"Python\xff\xfe and SQL";
        assert_eq!(extract(bytes, FileKind::Txt).unwrap(), "Python and SQL");
    }

    #[test]
    fn test_plain_text_never_fails() {
        let text = extract(&[0xc3, 0x28, b'R'], FileKind::Txt).unwrap();
        assert_eq!(text, "(R");
    }

    #[test]
    fn test_whitespace_only_text_is_returned_as_is() {
        // Emptiness is judged by the upload pipeline, not the extractor.
        assert_eq!(extract(b"  \n\t ", FileKind::Txt).unwrap(), "  \n\t ");
    }

    #[tokio::test]
    async fn test_extract_upload_runs_docx_on_blocking_pool() {
        let bytes = Bytes::from_static(b"definitely not a zip archive");
        let err = extract_upload(bytes, FileKind::Docx).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }
}
