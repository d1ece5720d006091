//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while saving or resuming a message log checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the checkpoint as JSON or binary failed
    #[error("Failed to write checkpoint: {0}")]
    SerializationFailed(String),

    /// The input was not a well-formed checkpoint
    #[error("Failed to read checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by an incompatible version of this crate
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Well-formed, but the recorded log is inconsistent
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
