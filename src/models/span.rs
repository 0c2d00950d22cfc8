use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::REVIEW_CONFIDENCE_THRESHOLD;

/// Namespace for deterministic candidate ids (UUIDv5 over position + type).
const CANDIDATE_NAMESPACE: Uuid = Uuid::from_u128(0x8f3c_e7d1_2a40_4b8e_9c51_d6a0_77e2_1f43);

/// Category of a detected span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpanType {
    Email,
    Phone,
    Url,
    PersonName,
    Monetary,
    DateLike,
}

impl fmt::Display for SpanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanType::Email => "EMAIL",
            SpanType::Phone => "PHONE",
            SpanType::Url => "URL",
            SpanType::PersonName => "PERSON_NAME",
            SpanType::Monetary => "MONETARY",
            SpanType::DateLike => "DATE_LIKE",
        };
        write!(f, "{name}")
    }
}

/// A detected region of the document text.
///
/// Offsets are **character** offsets, half-open: `text` equals exactly the
/// characters `[start, end)` of the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub span_type: SpanType,
    pub start: usize,
    pub end: usize,
    pub confidence: f32,
}

impl Span {
    /// Invariant check used by detectors and tests: the stored text must
    /// match the source characters at `[start, end)`.
    pub fn matches_source(&self, source: &str) -> bool {
        char_slice(source, self.start, self.end) == self.text
    }
}

/// Slice of `text` between char offsets `start` and `end` (half-open).
pub fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Review decision attached to a candidate. Re-decision is allowed in any
/// direction; the tracker never locks a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A span that survived filtering and is scheduled for redaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionCandidate {
    pub id: Uuid,
    pub span: Span,
    /// Fixed-threshold flag; independent of the sensitivity level.
    pub needs_review: bool,
    pub decision: ReviewDecision,
    pub annotations: Vec<String>,
}

impl RedactionCandidate {
    pub fn from_span(span: Span) -> Self {
        Self {
            id: Self::id_for(&span),
            needs_review: span.confidence < REVIEW_CONFIDENCE_THRESHOLD,
            decision: ReviewDecision::Pending,
            annotations: Vec::new(),
            span,
        }
    }

    /// Deterministic id over position and type. The same span in a
    /// re-detected document maps to the same id, so callers can replay
    /// review decisions across runs if they choose to.
    pub fn id_for(span: &Span) -> Uuid {
        let key = format!("{}:{}:{}", span.start, span.end, span.span_type);
        Uuid::new_v5(&CANDIDATE_NAMESPACE, key.as_bytes())
    }
}

/// Options controlling filtering and redaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionOptions {
    /// 0 (most conservative, fewest redactions) to 100 (most aggressive).
    /// Values above 100 are clamped.
    pub sensitivity_level: u8,
    pub redact_pii: bool,
    pub redact_financial: bool,
    pub redact_dates: bool,
}

impl Default for RedactionOptions {
    fn default() -> Self {
        Self {
            sensitivity_level: 50,
            redact_pii: true,
            redact_financial: true,
            redact_dates: true,
        }
    }
}

/// Output of one filter + redact run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionResult {
    pub candidates: Vec<RedactionCandidate>,
    /// Same character length as the source text; candidate ranges are
    /// overwritten with block characters.
    pub redacted_text: String,
}
