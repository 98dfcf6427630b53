//! Errors raised while assembling a stack into a template.

use pipestack_types::PipeError;

/// Synthesis-time failure. All variants are synchronous and abort template
/// construction; there is nothing to retry.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Two resources were registered under the same logical id.
    #[error("duplicate logical id '{0}' in stack")]
    DuplicateLogicalId(String),

    /// Logical ids must be non-empty and alphanumeric.
    #[error("invalid logical id '{id}': {reason}")]
    InvalidLogicalId { id: String, reason: String },

    /// Pipe wiring failure (missing step, bad parameter).
    #[error(transparent)]
    Pipe(#[from] PipeError),

    /// Resource properties could not be serialized.
    #[error("failed to serialize resource properties: {0}")]
    Serialize(#[from] serde_json::Error),
}
