//! Filter + scorer: sensitivity-driven thresholding and category routing.
//! Pure functions; applying the filter twice yields the same candidates.

use crate::models::{RedactionCandidate, RedactionOptions, Span, SpanType};

/// Minimum confidence a span needs to survive at the given sensitivity.
/// Monotone non-increasing: sensitivity 0 keeps only certainty (1.0),
/// sensitivity 100 keeps everything.
pub fn effective_threshold(sensitivity_level: u8) -> f32 {
    let s = sensitivity_level.min(100) as f32;
    (100.0 - s) / 100.0
}

/// Whether the span's category is enabled by the option flags.
pub fn category_enabled(span_type: SpanType, options: &RedactionOptions) -> bool {
    match span_type {
        SpanType::Email | SpanType::Phone | SpanType::Url | SpanType::PersonName => {
            options.redact_pii
        }
        SpanType::Monetary => options.redact_financial,
        SpanType::DateLike => options.redact_dates,
    }
}

/// Build redaction candidates from detected spans: disabled categories
/// and sub-threshold confidences are dropped; survivors keep span order.
pub fn filter_spans(spans: &[Span], options: &RedactionOptions) -> Vec<RedactionCandidate> {
    let threshold = effective_threshold(options.sensitivity_level);
    spans
        .iter()
        .filter(|span| category_enabled(span.span_type, options) && span.confidence >= threshold)
        .cloned()
        .map(RedactionCandidate::from_span)
        .collect()
}
