use std::fmt;

use serde::{Deserialize, Serialize};

use super::span::Span;

/// Declared container format of an incoming document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Word,
    Unknown,
}

impl DocumentKind {
    /// Map a filename extension to a kind. Anything unrecognized is
    /// `Unknown`, which the extractor rejects up front.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "doc" | "docx" => DocumentKind::Word,
            _ => DocumentKind::Unknown,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Word => write!(f, "word"),
            DocumentKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Raw document input: owned bytes plus the declared kind.
///
/// The bytes are owned outright so the pipeline never depends on a live
/// file handle or a share-mode lock held by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, kind: DocumentKind) -> Self {
        Self { bytes, kind }
    }
}

/// Metadata captured during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub kind: DocumentKind,
    /// Page count for paginated containers (PDF). Absent for kinds that
    /// yield one text blob, like Word.
    pub page_count: Option<usize>,
    /// Whitespace-separated token count of the full text.
    pub word_count: usize,
}

/// A document after text extraction. `entities` starts empty and is
/// populated by the detection stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
    pub entities: Vec<Span>,
}
