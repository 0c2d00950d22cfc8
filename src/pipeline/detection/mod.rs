pub mod patterns;
pub mod remote;

pub use patterns::*;
pub use remote::*;

use thiserror::Error;

use crate::models::Span;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("entity service unreachable at {0}")]
    Connection(String),

    #[error("entity service request failed: {0}")]
    Http(String),

    #[error("entity service returned malformed payload: {0}")]
    Payload(String),
}

/// Merge baseline and secondary spans: sorted by position, exact
/// `(start, end, type)` duplicates collapsed keeping the higher
/// confidence.
pub fn merge_spans(baseline: Vec<Span>, secondary: Vec<Span>) -> Vec<Span> {
    let mut all = baseline;
    all.extend(secondary);
    all.sort_by(|a, b| {
        (a.start, a.end, a.span_type).cmp(&(b.start, b.end, b.span_type))
    });
    all.dedup_by(|next, prev| {
        if next.start == prev.start && next.end == prev.end && next.span_type == prev.span_type {
            prev.confidence = prev.confidence.max(next.confidence);
            true
        } else {
            false
        }
    });
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpanType;

    fn span(start: usize, end: usize, span_type: SpanType, confidence: f32) -> Span {
        Span {
            text: "x".repeat(end - start),
            span_type,
            start,
            end,
            confidence,
        }
    }

    #[test]
    fn merge_sorts_by_position() {
        let merged = merge_spans(
            vec![span(10, 15, SpanType::Email, 0.95)],
            vec![span(2, 6, SpanType::PersonName, 0.7)],
        );
        assert_eq!(merged[0].start, 2);
        assert_eq!(merged[1].start, 10);
    }

    #[test]
    fn duplicate_keeps_higher_confidence() {
        let merged = merge_spans(
            vec![span(3, 9, SpanType::Monetary, 0.6)],
            vec![span(3, 9, SpanType::Monetary, 0.85)],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].confidence, 0.85);
    }

    #[test]
    fn same_range_different_type_both_survive() {
        let merged = merge_spans(
            vec![span(3, 9, SpanType::Email, 0.95)],
            vec![span(3, 9, SpanType::PersonName, 0.7)],
        );
        assert_eq!(merged.len(), 2);
    }
}
