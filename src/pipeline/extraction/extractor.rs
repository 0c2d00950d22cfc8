//! Extraction orchestrator: routes a raw document to its backend and
//! assembles the full text plus metadata.

use tracing::{info, warn};

use super::pdf::PdfTextBackend;
use super::types::{PageOutcome, PdfBackend, WordBackend};
use super::word::DocxTextBackend;
use super::ExtractionError;
use crate::models::{DocumentKind, DocumentMetadata, ProcessedDocument, RawDocument};

/// Orchestrates text extraction over backend traits.
///
/// Per-page failures inside a parsed PDF are non-fatal: the page is
/// logged, skipped, and contributes an empty string so page boundaries
/// stay stable. Container-level failures abort the extraction.
pub struct DocumentExtractor {
    pdf: Box<dyn PdfBackend>,
    word: Box<dyn WordBackend>,
}

impl DocumentExtractor {
    pub fn new(pdf: Box<dyn PdfBackend>, word: Box<dyn WordBackend>) -> Self {
        Self { pdf, word }
    }

    /// Production wiring: pdf-extract for PDFs, DOCX scrape for Word.
    pub fn with_default_backends() -> Self {
        Self::new(Box::new(PdfTextBackend), Box::new(DocxTextBackend))
    }

    pub fn extract(&self, doc: &RawDocument) -> Result<ProcessedDocument, ExtractionError> {
        let (text, page_count) = match doc.kind {
            DocumentKind::Unknown => return Err(ExtractionError::UnsupportedKind(doc.kind)),
            DocumentKind::Pdf => {
                let pages = self.pdf.extract_pages(&doc.bytes)?;
                let page_count = pages.len();
                let mut texts = Vec::with_capacity(page_count);
                for (i, page) in pages.into_iter().enumerate() {
                    match page {
                        PageOutcome::Text(t) => texts.push(t),
                        PageOutcome::Failed(reason) => {
                            warn!(page = i + 1, %reason, "page extraction failed, skipping page");
                            texts.push(String::new());
                        }
                    }
                }
                // Single newline between pages keeps offsets predictable.
                (texts.join("\n"), Some(page_count))
            }
            // Word text is one blob; only paginated kinds report a count.
            DocumentKind::Word => (self.word.extract_text(&doc.bytes)?, None),
        };

        let metadata = DocumentMetadata {
            kind: doc.kind,
            page_count,
            word_count: count_words(&text),
        };

        info!(
            document_kind = %doc.kind,
            page_count = ?metadata.page_count,
            word_count = metadata.word_count,
            text_length = text.len(),
            "extraction complete"
        );

        Ok(ProcessedDocument {
            text,
            metadata,
            entities: Vec::new(),
        })
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
