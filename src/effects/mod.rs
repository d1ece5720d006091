//! Effects carried by steps, built on Stillwater 0.11.0.
//!
//! A [`Cmd`] is the "imperative shell" side of a step: a batch of deferred
//! effects the host runs after applying the new state. This crate only
//! builds, re-tags and concatenates them.
//!
//! # Key Concepts
//!
//! - **Effects**: any Stillwater effect whose output is a message and which
//!   cannot fail (`Error = Infallible`)
//! - **Attempts**: fallible effects whose `Result` is turned into a message
//! - **Environment**: effects are run by the host against its own `Env`,
//!   following Stillwater's reader pattern

pub(crate) mod cmd;

pub use cmd::{Cmd, CmdEffect};
