use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Shroud";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed confidence threshold below which a candidate is flagged for
/// human review. Independent of the sensitivity level.
pub const REVIEW_CONFIDENCE_THRESHOLD: f32 = 0.8;

/// Character stamped over every redacted position (U+2588 FULL BLOCK).
pub const REDACTION_BLOCK: char = '█';

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "shroud=info".to_string()
}

/// Pipeline wiring knobs. With no secondary endpoint configured the
/// pipeline runs baseline pattern detection only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub secondary_endpoint: Option<String>,
    pub secondary_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            secondary_endpoint: None,
            secondary_timeout_secs: 10,
        }
    }
}
