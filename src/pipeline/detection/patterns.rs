//! Baseline pattern detection: regex families with fixed per-family
//! confidence. Pure function of the text; no I/O, no configuration.

use regex::Regex;

use crate::models::{Span, SpanType};

const EMAIL_CONFIDENCE: f32 = 0.95;
const PHONE_CONFIDENCE: f32 = 0.95;
const URL_CONFIDENCE: f32 = 0.90;

/// Compiled regex families. Build once and reuse; compilation is the
/// expensive part.
pub struct PatternDetector {
    email: Regex,
    phone: Regex,
    url: Regex,
}

impl PatternDetector {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")
                .expect("hardcoded email pattern is valid"),
            phone: Regex::new(r"(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)\s?|\d{3}[-.\s])\d{3}[-.]\d{4}")
                .expect("hardcoded phone pattern is valid"),
            url: Regex::new(r"https?://[^\s<>()]+").expect("hardcoded url pattern is valid"),
        }
    }

    /// Detect all baseline spans, in ascending start order. Offsets are
    /// char offsets; each span's text is the exact source slice.
    pub fn detect(&self, text: &str) -> Vec<Span> {
        let index = CharIndex::new(text);
        let families = [
            (&self.email, SpanType::Email, EMAIL_CONFIDENCE),
            (&self.phone, SpanType::Phone, PHONE_CONFIDENCE),
            (&self.url, SpanType::Url, URL_CONFIDENCE),
        ];

        let mut spans = Vec::new();
        for (pattern, span_type, confidence) in families {
            for m in pattern.find_iter(text) {
                spans.push(Span {
                    text: m.as_str().to_string(),
                    span_type,
                    start: index.char_offset(m.start()),
                    end: index.char_offset(m.end()),
                    confidence,
                });
            }
        }
        spans.sort_by_key(|s| (s.start, s.end));
        spans
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte-offset to char-offset translation for a single text buffer.
struct CharIndex {
    char_starts: Vec<usize>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        Self {
            char_starts: text.char_indices().map(|(b, _)| b).collect(),
        }
    }

    /// `byte` must lie on a char boundary (regex match boundaries always
    /// do).
    fn char_offset(&self, byte: usize) -> usize {
        self.char_starts.partition_point(|&b| b < byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_email_with_fixed_confidence() {
        let detector = PatternDetector::new();
        let spans = detector.detect("write to jane.doe+tag@example.co.uk today");

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].span_type, SpanType::Email);
        assert_eq!(spans[0].text, "jane.doe+tag@example.co.uk");
        assert_eq!(spans[0].confidence, 0.95);
    }

    #[test]
    fn detects_phone_variants() {
        let detector = PatternDetector::new();
        for sample in ["555-123-4567", "(555) 123-4567", "555.123.4567"] {
            let text = format!("call {sample} now");
            let spans = detector.detect(&text);
            assert_eq!(spans.len(), 1, "missed {sample}");
            assert_eq!(spans[0].span_type, SpanType::Phone);
            assert_eq!(spans[0].confidence, 0.95);
        }
    }

    /// An optional leading country code belongs to the phone span, so
    /// redaction covers it instead of leaving a bare `+1` behind.
    #[test]
    fn country_code_is_part_of_the_phone_span() {
        let detector = PatternDetector::new();
        for sample in ["+1 555-123-4567", "+1-555-123-4567", "+44 555.123.4567"] {
            let text = format!("call {sample} now");
            let spans = detector.detect(&text);
            assert_eq!(spans.len(), 1, "missed {sample}");
            assert_eq!(spans[0].span_type, SpanType::Phone);
            assert_eq!(spans[0].text, sample);
            assert!(spans[0].matches_source(&text));
        }
    }

    #[test]
    fn detects_url() {
        let detector = PatternDetector::new();
        let spans = detector.detect("see https://example.com/path?q=1 for details");

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].span_type, SpanType::Url);
        assert_eq!(spans[0].text, "https://example.com/path?q=1");
        assert_eq!(spans[0].confidence, 0.90);
    }

    #[test]
    fn spans_come_back_in_start_order() {
        let detector = PatternDetector::new();
        let spans = detector.detect("a@b.com then 555-123-4567 then http://x.io");

        assert_eq!(spans.len(), 3);
        assert!(spans.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn span_text_matches_source_slice() {
        let detector = PatternDetector::new();
        let text = "Contact me at a@b.com or 555-123-4567.";
        for span in detector.detect(text) {
            assert!(span.matches_source(text), "span {span:?} drifted");
        }
    }

    #[test]
    fn offsets_are_char_offsets_in_multibyte_text() {
        let detector = PatternDetector::new();
        let text = "café owner: a@b.com";
        let spans = detector.detect(text);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 12);
        assert_eq!(spans[0].end, 19);
        assert!(spans[0].matches_source(text));
    }

    #[test]
    fn clean_text_yields_nothing() {
        let detector = PatternDetector::new();
        assert!(detector.detect("nothing sensitive in this sentence").is_empty());
    }
}
