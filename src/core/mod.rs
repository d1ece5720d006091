//! Recorded message histories.
//!
//! This module contains the pure pieces used to capture and replay what an
//! update function was fed:
//! - Message naming via the `Message` trait
//! - Immutable message logs
//!
//! Nothing here runs effects; replay returns a `Step` like any update.

mod history;
mod message;

pub use history::{MessageLog, MessageRecord};
pub use message::Message;
