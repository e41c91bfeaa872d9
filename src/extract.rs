//! Resume text extraction for PDF and DOCX uploads.
//!
//! Extraction never fails the pipeline: unsupported kinds and unparseable
//! documents degrade to empty text and the analysis simply reports a low
//! score.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("DOCX archive invalid: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("DOCX body invalid: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("DOCX encoding invalid: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
    #[error("DOCX read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            _ => DocumentKind::Unsupported,
        }
    }

}

/// Extracted document text. Unsupported kinds yield empty text rather than an
/// error; parse failures are reported to the caller.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => extract_pdf_text(data),
        DocumentKind::Docx => extract_docx_text(data),
        DocumentKind::Unsupported => Ok(String::new()),
    }
}

/// Extraction that never fails: any parse error becomes empty text, logged
/// at warn.
pub fn extract_text_or_empty(kind: DocumentKind, data: &[u8]) -> String {
    match extract_text(kind, data) {
        Ok(text) => text,
        Err(err) => {
            warn!("resume extraction failed, treating as empty: {err}");
            String::new()
        }
    }
}

fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    // Pages with no extractable text contribute nothing; page texts arrive
    // separated by line breaks.
    Ok(pdf_extract::extract_text_from_mem(data)?)
}

fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut document_file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut lines = Vec::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:p" {
                    in_paragraph = true;
                    current.clear();
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"w:p" {
                    if !current.trim().is_empty() {
                        lines.push(current.trim().to_string());
                    }
                    current.clear();
                    in_paragraph = false;
                }
            }
            Ok(Event::Text(e)) => {
                if in_paragraph {
                    let value = e.xml_content()?.into_owned();
                    current.push_str(&value);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }

        buf.clear();
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body></w:document>"#
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn docx_paragraphs_join_with_newlines() {
        let data = docx_fixture(&["Jane Doe", "Python and AWS experience"]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "Jane Doe\nPython and AWS experience");
    }

    #[test]
    fn docx_empty_paragraphs_are_skipped() {
        let data = docx_fixture(&["", "only line", ""]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "only line");
    }

    #[test]
    fn unsupported_kind_yields_empty_text() {
        assert_eq!(
            extract_text(DocumentKind::Unsupported, b"anything").unwrap(),
            ""
        );
    }

    #[test]
    fn garbage_bytes_degrade_to_empty() {
        assert_eq!(
            extract_text_or_empty(DocumentKind::Docx, b"not a zip archive"),
            ""
        );
        assert_eq!(
            extract_text_or_empty(DocumentKind::Pdf, b"not a pdf either"),
            ""
        );
    }

    #[test]
    fn kind_detection_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("cv.PDF")), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.docx")),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.txt")),
            DocumentKind::Unsupported
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("no_extension")),
            DocumentKind::Unsupported
        );
    }
}
