//! Review state tracking for redaction candidates.
//!
//! Holds the current redaction result plus the reviewer's selection.
//! Decisions are re-takeable in any direction; annotations are
//! append-only. Nothing here persists across runs: loading a new result
//! resets the tracker (deterministic candidate ids let callers replay
//! decisions if they want continuity).

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{RedactionCandidate, RedactionResult, ReviewDecision};

#[derive(Error, Debug, PartialEq)]
pub enum ReviewError {
    #[error("no redaction result loaded")]
    NoResult,

    #[error("unknown candidate: {0}")]
    UnknownCandidate(Uuid),

    #[error("annotation is empty")]
    EmptyAnnotation,
}

/// Per-decision tallies for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Default)]
pub struct ReviewTracker {
    result: Option<RedactionResult>,
    selected: Option<Uuid>,
}

impl ReviewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked result. Clears the selection; any decisions on
    /// the previous result are gone with it.
    pub fn load(&mut self, result: RedactionResult) {
        self.result = Some(result);
        self.selected = None;
    }

    pub fn result(&self) -> Option<&RedactionResult> {
        self.result.as_ref()
    }

    fn candidate_mut(&mut self, id: Uuid) -> Result<&mut RedactionCandidate, ReviewError> {
        let result = self.result.as_mut().ok_or(ReviewError::NoResult)?;
        result
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ReviewError::UnknownCandidate(id))
    }

    pub fn approve(&mut self, id: Uuid) -> Result<(), ReviewError> {
        self.candidate_mut(id)?.decision = ReviewDecision::Approved;
        Ok(())
    }

    pub fn reject(&mut self, id: Uuid) -> Result<(), ReviewError> {
        self.candidate_mut(id)?.decision = ReviewDecision::Rejected;
        Ok(())
    }

    /// Append an annotation. Empty or whitespace-only notes are rejected
    /// and leave the candidate untouched.
    pub fn annotate(&mut self, id: Uuid, note: &str) -> Result<(), ReviewError> {
        if note.trim().is_empty() {
            return Err(ReviewError::EmptyAnnotation);
        }
        self.candidate_mut(id)?.annotations.push(note.to_string());
        Ok(())
    }

    /// Point the selection at a candidate. An id that matches nothing
    /// clears the selection instead of erroring.
    pub fn select(&mut self, id: Uuid) {
        let exists = self
            .result
            .as_ref()
            .is_some_and(|r| r.candidates.iter().any(|c| c.id == id));
        self.selected = exists.then_some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&RedactionCandidate> {
        let id = self.selected?;
        self.result
            .as_ref()?
            .candidates
            .iter()
            .find(|c| c.id == id)
    }

    pub fn counts(&self) -> ReviewCounts {
        let mut counts = ReviewCounts {
            pending: 0,
            approved: 0,
            rejected: 0,
        };
        if let Some(result) = &self.result {
            for candidate in &result.candidates {
                match candidate.decision {
                    ReviewDecision::Pending => counts.pending += 1,
                    ReviewDecision::Approved => counts.approved += 1,
                    ReviewDecision::Rejected => counts.rejected += 1,
                }
            }
        }
        counts
    }
}
