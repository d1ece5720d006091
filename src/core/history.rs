//! Message history tracking.
//!
//! Provides an immutable record of the messages dispatched to an update
//! function, and replays it through that function with [`fold_steps`].

use super::message::Message;
use crate::effects::Cmd;
use crate::step::{fold_steps, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

/// Record of a single dispatched message.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MessageRecord<M: Message> {
    /// The message as dispatched
    pub message: M,
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,
    /// Position in the log, starting at zero
    pub sequence: usize,
}

/// Ordered log of dispatched messages.
///
/// The log is immutable - `record` returns a new log with the message
/// appended.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{Message, MessageLog};
/// use stepwise::{Cmd, Step};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Msg {
///     Add(u32),
/// }
///
/// impl Message for Msg {
///     fn name(&self) -> &str {
///         "Add"
///     }
/// }
///
/// let log = MessageLog::new().record(Msg::Add(2)).record(Msg::Add(3));
///
/// let step = log.replay(
///     |Msg::Add(n), total: &u32| -> Step<u32, Msg, ()> { Step::to(total + n) },
///     (0, Cmd::none()),
/// );
/// assert_eq!(step.state(), Some(&5));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MessageLog<M: Message> {
    records: Vec<MessageRecord<M>>,
}

impl<M: Message> Default for MessageLog<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Message> MessageLog<M> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a message, returning a new log.
    ///
    /// This does not mutate the existing log.
    pub fn record(&self, message: M) -> Self {
        self.record_at(message, Utc::now())
    }

    /// Record a message with an explicit timestamp.
    pub fn record_at(&self, message: M, timestamp: DateTime<Utc>) -> Self {
        let mut records = self.records.clone();
        records.push(MessageRecord {
            message,
            timestamp,
            sequence: self.records.len(),
        });
        Self { records }
    }

    /// All records in dispatch order.
    pub fn records(&self) -> &[MessageRecord<M>] {
        &self.records
    }

    /// The recorded messages in dispatch order.
    pub fn messages(&self) -> impl Iterator<Item = &M> {
        self.records.iter().map(|record| &record.message)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Time between the first and last recorded message.
    ///
    /// Returns `None` for an empty log, or if the timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Replay the log through `update`, starting from `initial`.
    ///
    /// Same semantics as [`fold_steps`]: replay stops at the first `Stay` or
    /// `Exit`, and later messages are not passed to `update`.
    pub fn replay<S, A, Env, F>(&self, mut update: F, initial: (S, Cmd<M, Env>)) -> Step<S, M, A, Env>
    where
        F: FnMut(M, &S) -> Step<S, M, A, Env>,
    {
        debug!(messages = self.records.len(), "replaying message log");

        fold_steps(
            |message: M, state: &S| {
                trace!(message = message.name(), "replaying message");
                update(message, state)
            },
            initial,
            self.messages().cloned(),
        )
    }
}
