pub mod decode;
pub mod orchestrator;
pub mod prompt;

pub use decode::*;
pub use orchestrator::*;

use thiserror::Error;

use crate::db::DatabaseError;
use crate::llm::GenerationError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Model output was not valid JSON of the expected shape. Carries the
    /// raw text so callers can surface it for diagnosis.
    #[error("Failed to decode model output: {reason} (raw: {raw})")]
    Decode { reason: String, raw: String },

    #[error("Store error: {0}")]
    Store(#[from] DatabaseError),
}
