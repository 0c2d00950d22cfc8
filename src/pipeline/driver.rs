//! Pipeline driver: single entry point over extract → detect → filter →
//! redact, with supersede semantics for overlapping requests.
//!
//! Pure pipeline logic with trait-based DI. Does NOT own review state;
//! that belongs to the review layer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::detection::{merge_spans, EntityServiceClient, PatternDetector, SecondaryDetector};
use super::extraction::DocumentExtractor;
use super::filter::filter_spans;
use super::redact::apply_redactions;
use super::PipelineError;
use crate::config::PipelineConfig;
use crate::models::{
    DocumentKind, ProcessedDocument, RawDocument, RedactionOptions, RedactionResult,
};

#[derive(Default)]
struct DriverState {
    document: Option<ProcessedDocument>,
    result: Option<RedactionResult>,
    /// Sequence number of the newest run allowed to publish.
    latest: u64,
}

/// Orchestrates the redaction pipeline for one document at a time.
///
/// Every entry point takes a fresh monotonic sequence number; a run whose
/// number is no longer the latest when it finishes must not publish, so a
/// slow stale run can never clobber a newer one.
pub struct PipelineDriver {
    extractor: Arc<DocumentExtractor>,
    patterns: Arc<PatternDetector>,
    secondary: Option<Arc<dyn SecondaryDetector>>,
    state: Mutex<DriverState>,
    sequence: AtomicU64,
}

impl PipelineDriver {
    pub fn new(extractor: DocumentExtractor, patterns: PatternDetector) -> Self {
        Self {
            extractor: Arc::new(extractor),
            patterns: Arc::new(patterns),
            secondary: None,
            state: Mutex::new(DriverState::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Attach a secondary entity detector. Failures there degrade to
    /// baseline detection instead of failing the run.
    pub fn with_secondary(mut self, secondary: Arc<dyn SecondaryDetector>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Production wiring from config: default backends, plus the entity
    /// service client when an endpoint is configured.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let driver = Self::new(
            DocumentExtractor::with_default_backends(),
            PatternDetector::new(),
        );
        match &config.secondary_endpoint {
            Some(endpoint) => driver.with_secondary(Arc::new(EntityServiceClient::new(
                endpoint,
                config.secondary_timeout_secs,
            ))),
            None => driver,
        }
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Extract text and run baseline detection. Discards the previous
    /// document and result immediately, so a failed run leaves the driver
    /// empty rather than pointing at stale content.
    pub async fn process(
        &self,
        bytes: Vec<u8>,
        kind: DocumentKind,
    ) -> Result<ProcessedDocument, PipelineError> {
        let seq = self.next_sequence();
        {
            let mut state = self.state.lock().await;
            state.latest = seq;
            state.document = None;
            state.result = None;
        }

        info!(document_kind = %kind, sequence = seq, byte_count = bytes.len(), "processing document");

        let extractor = Arc::clone(&self.extractor);
        let patterns = Arc::clone(&self.patterns);
        let raw = RawDocument::new(bytes, kind);
        let document = tokio::task::spawn_blocking(move || {
            let mut document = extractor.extract(&raw)?;
            document.entities = patterns.detect(&document.text);
            Ok::<_, PipelineError>(document)
        })
        .await
        .map_err(|e| PipelineError::Worker(e.to_string()))??;

        let mut state = self.state.lock().await;
        if state.latest != seq {
            debug!(sequence = seq, "dropping superseded process result");
            return Err(PipelineError::Superseded);
        }
        state.document = Some(document.clone());

        info!(
            sequence = seq,
            entity_count = document.entities.len(),
            "document ready"
        );
        Ok(document)
    }

    /// Filter and redact the current document under the given options.
    /// Candidates are rebuilt from scratch on every call; prior review
    /// decisions are not carried over.
    pub async fn apply_options(
        &self,
        options: &RedactionOptions,
    ) -> Result<RedactionResult, PipelineError> {
        let seq = self.next_sequence();
        let (text, baseline) = {
            let mut state = self.state.lock().await;
            let document = state.document.as_ref().ok_or(PipelineError::NoDocument)?;
            let snapshot = (document.text.clone(), document.entities.clone());
            state.latest = seq;
            state.result = None;
            snapshot
        };

        let spans = match &self.secondary {
            None => baseline,
            Some(secondary) => {
                let secondary = Arc::clone(secondary);
                let detect_text = text.clone();
                let detect_options = options.clone();
                let outcome = tokio::task::spawn_blocking(move || {
                    secondary.detect(&detect_text, &detect_options)
                })
                .await;
                match outcome {
                    Ok(Ok(extra)) => merge_spans(baseline, extra),
                    Ok(Err(err)) => {
                        warn!(%err, "secondary detection unavailable, using baseline spans");
                        baseline
                    }
                    Err(err) => {
                        warn!(%err, "secondary detection worker failed, using baseline spans");
                        baseline
                    }
                }
            }
        };

        let candidates = filter_spans(&spans, options);
        let redacted_text = apply_redactions(&text, &candidates);
        let result = RedactionResult {
            candidates,
            redacted_text,
        };

        let mut state = self.state.lock().await;
        if state.latest != seq {
            debug!(sequence = seq, "dropping superseded redaction result");
            return Err(PipelineError::Superseded);
        }
        state.result = Some(result.clone());

        info!(
            sequence = seq,
            candidate_count = result.candidates.len(),
            sensitivity = options.sensitivity_level,
            "redaction options applied"
        );
        Ok(result)
    }

    pub async fn current_document(&self) -> Option<ProcessedDocument> {
        self.state.lock().await.document.clone()
    }

    pub async fn current_result(&self) -> Option<RedactionResult> {
        self.state.lock().await.result.clone()
    }
}
