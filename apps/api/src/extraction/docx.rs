use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractionError;

/// Concatenates body paragraph text in document order, one paragraph per line.
/// Tables are skipped; hyperlink text counts as part of its paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractionError::Parse(format!("DOCX parse error: {e}")))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph_text(paragraph));
            text.push('\n');
        }
    }

    Ok(text)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut content = String::new();
    push_paragraph_children(&paragraph.children, &mut content);
    content
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for para_child in children {
        match para_child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Run, Table, TableCell, TableRow};
    use std::io::Cursor;

    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        pack(docx)
    }

    fn pack(docx: Docx) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_by_newlines_in_order() {
        let bytes = build_docx(&["Jane Doe", "Skills: Python, SQL", "Docker"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSkills: Python, SQL\nDocker\n");
    }

    #[test]
    fn test_table_cells_are_skipped() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Kubernetes"))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Scrum"))),
        ])]);
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Summary")))
            .add_table(table)
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Docker")));

        let text = extract_docx_text(&pack(docx)).unwrap();
        assert_eq!(text, "Summary\nDocker\n");
    }

    #[test]
    fn test_hyperlinked_text_is_kept_in_order() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Skills: "))
            .add_hyperlink(
                Hyperlink::new("skills", HyperlinkType::Anchor).add_run(Run::new().add_text("Python")),
            )
            .add_run(Run::new().add_text(", SQL"));
        let docx = Docx::new().add_paragraph(paragraph);

        let text = extract_docx_text(&pack(docx)).unwrap();
        assert_eq!(text, "Skills: Python, SQL\n");
    }

    #[test]
    fn test_corrupt_docx_is_parse_error() {
        let err = extract_docx_text(b"PK\x03\x04 truncated archive").unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }
}
