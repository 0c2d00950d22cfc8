use super::ExtractionError;

/// Outcome of extracting a single page. A failed page carries the reason
/// so the orchestrator can log and skip it without failing the document.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    Text(String),
    Failed(String),
}

/// Page-wise PDF text extraction abstraction (allows mocking for tests).
///
/// A `Err` return means the container itself could not be parsed and the
/// whole extraction fails; individual bad pages are reported in-band as
/// `PageOutcome::Failed`.
pub trait PdfBackend: Send + Sync {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageOutcome>, ExtractionError>;
}

/// Word document text extraction abstraction.
pub trait WordBackend: Send + Sync {
    fn extract_text(&self, doc_bytes: &[u8]) -> Result<String, ExtractionError>;
}
