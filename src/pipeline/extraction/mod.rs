pub mod extractor;
pub mod pdf;
pub mod types;
pub mod word;

pub use extractor::*;
pub use pdf::*;
pub use types::*;
pub use word::*;

use thiserror::Error;

use crate::models::DocumentKind;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported document kind: {0}")]
    UnsupportedKind(DocumentKind),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Word container parsing failed: {0}")]
    WordParsing(String),

    #[error("text encoding error: {0}")]
    Encoding(String),
}
