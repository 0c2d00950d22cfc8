pub mod detection;
pub mod driver;
pub mod extraction;
pub mod filter;
pub mod redact;

pub use driver::*;

use thiserror::Error;

use extraction::ExtractionError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("no document has been processed")]
    NoDocument,

    #[error("run superseded by a newer request")]
    Superseded,

    #[error("background worker failed: {0}")]
    Worker(String),
}
