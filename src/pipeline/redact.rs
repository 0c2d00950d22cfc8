//! Redaction application: literal per-index block stamping.

use crate::config::REDACTION_BLOCK;
use crate::models::RedactionCandidate;

/// Overwrite every character covered by a candidate with the block
/// character. Length-preserving in characters; positions outside all
/// candidate ranges are untouched. Out-of-range indices are clamped, and
/// overlapping candidates simply stamp the shared positions again.
pub fn apply_redactions(text: &str, candidates: &[RedactionCandidate]) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    let mut ordered: Vec<&RedactionCandidate> = candidates.iter().collect();
    ordered.sort_by_key(|c| (c.span.start, c.span.end));

    for candidate in ordered {
        let end = candidate.span.end.min(chars.len());
        let start = candidate.span.start.min(end);
        for slot in &mut chars[start..end] {
            *slot = REDACTION_BLOCK;
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Span, SpanType};

    fn candidate(start: usize, end: usize) -> RedactionCandidate {
        RedactionCandidate::from_span(Span {
            text: "x".repeat(end.saturating_sub(start)),
            span_type: SpanType::Email,
            start,
            end,
            confidence: 0.95,
        })
    }

    #[test]
    fn stamps_candidate_range_only() {
        let redacted = apply_redactions("hello world", &[candidate(6, 11)]);
        assert_eq!(redacted, "hello █████");
    }

    #[test]
    fn no_candidates_leaves_text_identical() {
        let text = "nothing to hide";
        assert_eq!(apply_redactions(text, &[]), text);
    }

    #[test]
    fn preserves_char_length() {
        let text = "short text with a@b.com inside";
        let redacted = apply_redactions(text, &[candidate(18, 25)]);
        assert_eq!(redacted.chars().count(), text.chars().count());
    }

    #[test]
    fn out_of_range_end_is_clamped() {
        let redacted = apply_redactions("abc", &[candidate(1, 99)]);
        assert_eq!(redacted, "a██");
    }

    #[test]
    fn fully_out_of_range_candidate_is_a_no_op() {
        let redacted = apply_redactions("abc", &[candidate(10, 20)]);
        assert_eq!(redacted, "abc");
    }

    #[test]
    fn overlapping_candidates_stamp_literally() {
        let redacted = apply_redactions("abcdefgh", &[candidate(1, 5), candidate(3, 7)]);
        assert_eq!(redacted, "a██████h");
    }

    #[test]
    fn unsorted_input_is_sorted_before_stamping() {
        let redacted = apply_redactions("0123456789", &[candidate(6, 8), candidate(1, 3)]);
        assert_eq!(redacted, "0██345██89");
    }

    #[test]
    fn multibyte_text_stamps_by_char_position() {
        let redacted = apply_redactions("naïve café", &[candidate(6, 10)]);
        assert_eq!(redacted, "naïve ████");
    }
}
