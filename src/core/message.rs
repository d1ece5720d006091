//! Core Message trait for recorded messages.
//!
//! Messages that are logged and replayed implement this trait, which
//! provides a stable name for log records and tracing events.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for messages that can be recorded in a [`MessageLog`].
///
/// # Required Traits
///
/// - `Clone`: replay hands owned copies to the update function
/// - `Debug`: messages must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: logs are persisted in checkpoints
///
/// # Example
///
/// ```rust
/// use stepwise::core::Message;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum FormMsg {
///     TypeString(String),
///     Confirm,
/// }
///
/// impl Message for FormMsg {
///     fn name(&self) -> &str {
///         match self {
///             Self::TypeString(_) => "TypeString",
///             Self::Confirm => "Confirm",
///         }
///     }
/// }
///
/// assert_eq!(FormMsg::Confirm.name(), "Confirm");
/// ```
///
/// [`MessageLog`]: super::MessageLog
pub trait Message:
    Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name of the message variant for logs.
    fn name(&self) -> &str;
}
