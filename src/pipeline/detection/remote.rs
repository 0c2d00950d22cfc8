//! Optional secondary entity detection over HTTP.
//!
//! The service augments the regex baseline with families regexes cannot
//! express well (person names, money amounts, date-like strings). The
//! pipeline treats any failure here as a degradation, never an abort.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DetectionError;
use crate::models::{char_slice, RedactionOptions, Span, SpanType};

/// Secondary detection abstraction (allows mocking for tests).
pub trait SecondaryDetector: Send + Sync {
    fn detect(&self, text: &str, options: &RedactionOptions) -> Result<Vec<Span>, DetectionError>;
}

/// HTTP client for an entity detection service.
pub struct EntityServiceClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl EntityServiceClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }
}

/// Request body for POST /v1/entities
#[derive(Serialize)]
struct EntityRequest<'a> {
    text: &'a str,
    sensitivity: u8,
}

/// Response body from POST /v1/entities
#[derive(Deserialize)]
struct EntityResponse {
    entities: Vec<EntityPayload>,
}

/// One detected entity. `start`/`end` are char offsets into the
/// submitted text.
#[derive(Deserialize)]
struct EntityPayload {
    label: String,
    start: usize,
    end: usize,
    confidence: f32,
}

fn span_type_for_label(label: &str) -> Option<SpanType> {
    match label {
        "PERSON" | "PERSON_NAME" | "NAME" => Some(SpanType::PersonName),
        "MONEY" | "MONETARY" => Some(SpanType::Monetary),
        "DATE" | "DATE_LIKE" => Some(SpanType::DateLike),
        _ => None,
    }
}

impl SecondaryDetector for EntityServiceClient {
    fn detect(&self, text: &str, options: &RedactionOptions) -> Result<Vec<Span>, DetectionError> {
        let url = format!("{}/v1/entities", self.base_url);
        let body = EntityRequest {
            text,
            sensitivity: options.sensitivity_level.min(100),
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                DetectionError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                DetectionError::Http(format!("request timed out after {}s", self.timeout_secs))
            } else {
                DetectionError::Http(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(DetectionError::Http(format!(
                "entity service returned {}",
                response.status()
            )));
        }

        let payload: EntityResponse = response
            .json()
            .map_err(|e| DetectionError::Payload(e.to_string()))?;

        let char_len = text.chars().count();
        let mut spans = Vec::with_capacity(payload.entities.len());
        for entity in payload.entities {
            let Some(span_type) = span_type_for_label(&entity.label) else {
                debug!(label = %entity.label, "ignoring unmapped entity label");
                continue;
            };
            if entity.start >= entity.end || entity.end > char_len {
                debug!(
                    start = entity.start,
                    end = entity.end,
                    "ignoring entity with out-of-range offsets"
                );
                continue;
            }
            spans.push(Span {
                text: char_slice(text, entity.start, entity.end),
                span_type,
                start: entity.start,
                end: entity.end,
                confidence: entity.confidence,
            });
        }
        Ok(spans)
    }
}
