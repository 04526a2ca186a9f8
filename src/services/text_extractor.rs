use lopdf::Document;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    PlainText,
    Other(String),
}

impl MediaType {
    /// Resolves a `Content-Type` value, ignoring parameters such as `charset`.
    pub fn from_content_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => MediaType::Pdf,
            "text/plain" => MediaType::PlainText,
            _ => MediaType::Other(essence),
        }
    }

    pub fn from_file_name(file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => MediaType::Pdf,
            "txt" => MediaType::PlainText,
            _ => MediaType::Other(file_name.to_string()),
        }
    }

    /// Header first; a file name only decides when the header is missing or generic.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let from_header = content_type.map(Self::from_content_type);
        match (from_header, file_name) {
            (Some(MediaType::Other(_)) | None, Some(name)) => Self::from_file_name(name),
            (Some(media_type), _) => media_type,
            (None, None) => MediaType::Other("unknown".to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MediaType::Pdf => "PDF",
            MediaType::PlainText => "TXT file",
            MediaType::Other(name) => name,
        }
    }
}

/// An upload that lives only for the duration of one extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
}

impl UploadedDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, media_type: MediaType) -> Self {
        Self {
            bytes: bytes.into(),
            media_type,
        }
    }
}

/// Extracts the answer text from an uploaded document, trimmed of surrounding whitespace.
///
/// Only PDF and plain text are accepted; anything else is rejected with
/// [`AppError::UnsupportedMediaType`] rather than leaving the caller's answer untouched.
pub fn extract(document: &UploadedDocument) -> AppResult<String> {
    let text = match &document.media_type {
        MediaType::Pdf => extract_pdf(&document.bytes)?,
        MediaType::PlainText => std::str::from_utf8(&document.bytes)?.to_string(),
        MediaType::Other(name) => {
            return Err(AppError::UnsupportedMediaType(format!(
                "'{}' is not supported, upload a PDF or TXT file",
                name
            )))
        }
    };

    Ok(text.trim().to_string())
}

fn extract_pdf(bytes: &[u8]) -> AppResult<String> {
    // The parsed document is owned here and dropped on every return path.
    let document = Document::load_mem(bytes)?;

    let mut text = String::new();
    // BTreeMap keys are page numbers, so iteration is page order.
    for page_number in document.get_pages().keys() {
        let page_text = document.extract_text(&[*page_number])?;
        text.push_str(&page_text);
    }

    log::debug!(
        "Extracted {} characters from {} PDF pages",
        text.len(),
        document.get_pages().len()
    );
    Ok(text)
}
