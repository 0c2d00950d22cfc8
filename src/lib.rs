//! Shroud: a document redaction pipeline.
//!
//! Extracts text from PDF and Word documents, detects sensitive spans
//! (regex baseline plus an optional entity service), filters them by
//! sensitivity and category, applies offset-stable block redaction, and
//! tracks reviewer decisions over the resulting candidates.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod review;
pub mod telemetry;

pub use models::{
    DocumentKind, DocumentMetadata, ProcessedDocument, RawDocument, RedactionCandidate,
    RedactionOptions, RedactionResult, ReviewDecision, Span, SpanType,
};
pub use pipeline::{PipelineDriver, PipelineError};
pub use review::{ReviewError, ReviewTracker};
