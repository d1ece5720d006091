//! Checkpoint and resume for recorded message histories.
//!
//! A checkpoint captures a [`MessageLog`] so a session can be rebuilt later
//! by replaying it through the same update function. States and pending
//! effects are not stored: the state is recomputed on replay, and effects
//! are never serializable.

use crate::core::{Message, MessageLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a message log.
///
/// # Example
///
/// ```rust
/// use stepwise::checkpoint::Checkpoint;
/// use stepwise::core::{Message, MessageLog};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Msg {
///     Confirm,
/// }
///
/// impl Message for Msg {
///     fn name(&self) -> &str {
///         "Confirm"
///     }
/// }
///
/// let checkpoint = Checkpoint::new(MessageLog::new().record(Msg::Confirm));
/// let json = checkpoint.to_json().unwrap();
///
/// let restored: Checkpoint<Msg> = Checkpoint::from_json(&json).unwrap();
/// assert_eq!(restored.id, checkpoint.id);
/// assert_eq!(restored.log.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<M: Message> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Messages dispatched up to this point
    pub log: MessageLog<M>,
}

impl<M: Message> Checkpoint<M> {
    /// Snapshot `log` under a fresh identifier.
    pub fn new(log: MessageLog<M>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            log,
        }
    }

    /// Check that this checkpoint can be resumed by this version of the crate.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            warn!(
                found = self.version,
                supported = CHECKPOINT_VERSION,
                "rejecting checkpoint"
            );
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(record) = self
            .log
            .records()
            .iter()
            .enumerate()
            .find(|(index, record)| record.sequence != *index)
            .map(|(_, record)| record)
        {
            return Err(CheckpointError::ValidationFailed(format!(
                "message '{}' out of sequence at {}",
                record.message.name(),
                record.sequence
            )));
        }

        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        debug!(id = %self.id, messages = self.log.len(), "writing JSON checkpoint");
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, "loaded JSON checkpoint");
        Ok(checkpoint)
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        debug!(id = %self.id, messages = self.log.len(), "writing binary checkpoint");
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format and validate.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, "loaded binary checkpoint");
        Ok(checkpoint)
    }
}
