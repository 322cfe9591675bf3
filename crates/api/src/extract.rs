//! Text extraction for uploaded script documents.
//!
//! Supported formats are plain text (`.txt`, `.fountain`, `.md`), Word
//! (`.docx`) and PDF. A document whose text layer is blank is rejected so the
//! analyzer never runs on nothing.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;

/// Extensions read as UTF-8 text.
const PLAIN_TEXT_EXTENSIONS: [&str; 3] = ["txt", "fountain", "md"];

/// Path of the main body part inside a `.docx` archive.
const DOCX_BODY_PART: &str = "word/document.xml";

/// Largest decompressed `word/document.xml` that will be read.
pub const MAX_DOCX_XML_BYTES: u64 = 32 * 1024 * 1024;

/// `<w:t>` text runs plus the paragraph, tab and line-break markers between them.
static DOCX_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|</w:p>|<w:tab/>|<w:br/>").expect("valid regex")
});

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}. Upload a .txt, .fountain, .md, .docx or .pdf script.")]
    UnsupportedFormat(String),

    #[error("No readable script text found in {0}")]
    EmptyDocument(String),

    #[error("Could not read {filename}: {reason}")]
    Malformed { filename: String, reason: String },
}

impl ExtractError {
    /// Machine-readable code used in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedFormat(_) => "UNSUPPORTED_DOCUMENT",
            ExtractError::EmptyDocument(_) => "EMPTY_DOCUMENT",
            ExtractError::Malformed { .. } => "MALFORMED_DOCUMENT",
        }
    }

    fn malformed(filename: &str, reason: impl ToString) -> Self {
        ExtractError::Malformed {
            filename: filename.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Pick the format from the filename's extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            e if PLAIN_TEXT_EXTENSIONS.contains(&e) => Ok(DocumentFormat::PlainText),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extract script text from an uploaded document.
///
/// CPU-bound for PDFs; call it from `spawn_blocking` in async contexts.
pub fn extract(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let text = match DocumentFormat::from_filename(filename)? {
        DocumentFormat::PlainText => plain_text(bytes),
        DocumentFormat::Docx => docx_text(filename, bytes)?,
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::malformed(filename, e))?,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument(filename.to_string()));
    }
    Ok(text)
}

fn plain_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}

fn docx_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let xml = read_docx_body(filename, bytes, MAX_DOCX_XML_BYTES)?;
    Ok(document_xml_text(&xml))
}

/// Decompress the body part, refusing anything larger than `limit` bytes.
///
/// The declared size is checked first, then the read itself is bounded since
/// the header can lie.
fn read_docx_body(filename: &str, bytes: &[u8], limit: u64) -> Result<String, ExtractError> {
    let too_large = || ExtractError::malformed(filename, format!("document body exceeds {limit} bytes"));

    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::malformed(filename, e))?;
    let part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractError::malformed(filename, e))?;
    if part.size() > limit {
        return Err(too_large());
    }

    let mut xml = Vec::new();
    part.take(limit + 1)
        .read_to_end(&mut xml)
        .map_err(|e| ExtractError::malformed(filename, e))?;
    if xml.len() as u64 > limit {
        return Err(too_large());
    }
    String::from_utf8(xml).map_err(|e| ExtractError::malformed(filename, e))
}

/// Flatten WordprocessingML into text, one line per paragraph.
fn document_xml_text(xml: &str) -> String {
    let mut text = String::new();
    for caps in DOCX_TOKEN_RE.captures_iter(xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&decode_entities(run.as_str())),
            None => match &caps[0] {
                "<w:tab/>" => text.push('\t'),
                _ => text.push('\n'),
            },
        }
    }
    text
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
