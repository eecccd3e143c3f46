use std::panic;

use tracing::debug;

use super::ExtractionError;

/// Extracts the text of every page, in page order. Pages without text add nothing.
///
/// `pdf-extract` can panic on some malformed inputs, so the call is isolated
/// and a panic is reported as a parse failure.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    match outcome {
        Ok(Ok(text)) => {
            debug!("PDF extracted: {} chars", text.len());
            Ok(text)
        }
        Ok(Err(e)) => Err(ExtractionError::Parse(format!("PDF extraction failed: {e}"))),
        Err(_) => Err(ExtractionError::Parse(
            "PDF extraction failed: malformed document".to_string(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a single-page PDF with one line of Helvetica text and a valid xref table.
    pub(crate) fn minimal_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
        ];

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_start = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        out.extend_from_slice(xref.as_bytes());
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        out
    }

    #[test]
    fn test_well_formed_pdf_yields_text() {
        let pdf = minimal_pdf("Python SQL Docker");
        let text = extract_pdf_text(&pdf).unwrap();
        assert!(!text.trim().is_empty());
        assert!(text.contains("Python"), "got: {text:?}");
    }

    #[test]
    fn test_corrupt_pdf_is_parse_error() {
        let err = extract_pdf_text(b"%PDF-1.4\nthis is not a real pdf body").unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }

    #[test]
    fn test_random_bytes_are_parse_error() {
        let err = extract_pdf_text(&[0u8, 159, 146, 150, 7, 7, 7]).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }
}
