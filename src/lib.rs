//! Stepwise: composable state transitions for model/message/update loops
//!
//! An update function in a unidirectional-data-flow architecture turns a
//! message and the current state into the next state plus some effects.
//! Stepwise replaces that bare tuple with a [`Step`], which can also say
//! "nothing changed" (`Stay`) or "this sub-interaction is over" (`Exit`),
//! so that update logic can be assembled from smaller update functions.
//!
//! # Core Concepts
//!
//! - **Step**: `To(state, cmd)`, `Stay` or `Exit(value)`
//! - **Cmd**: an ordered batch of Stillwater effects that resolve to messages,
//!   run by the host, never by this crate
//! - **Composition**: `map`, `map_msg`, `map_exit`, `or_else`, `on_exit`
//! - **Host boundary**: `run` and `as_update_function` turn a step that can
//!   never exit back into `(state, cmd)`
//! - **Replay**: `fold_steps` and `MessageLog` feed recorded messages back
//!   through an update function
//!
//! # Example
//!
//! ```rust
//! use stepwise::Step;
//!
//! #[derive(Debug, PartialEq)]
//! enum Field {
//!     Invalid(String),
//!     Valid(String),
//! }
//!
//! enum FieldMsg {
//!     TypeString(String),
//!     Confirm,
//! }
//!
//! fn field(msg: FieldMsg, state: &Field) -> Step<Field, FieldMsg, String> {
//!     match (msg, state) {
//!         (FieldMsg::TypeString(s), _) if s.is_empty() => Step::to(Field::Invalid(s)),
//!         (FieldMsg::TypeString(s), _) => Step::to(Field::Valid(s)),
//!         (FieldMsg::Confirm, Field::Valid(s)) => Step::exit(s.clone()),
//!         (FieldMsg::Confirm, Field::Invalid(_)) => Step::stay(),
//!     }
//! }
//!
//! let typed = field(FieldMsg::TypeString("Set".into()), &Field::Invalid(String::new()));
//! assert_eq!(typed.state(), Some(&Field::Valid("Set".into())));
//!
//! let confirmed = field(FieldMsg::Confirm, &Field::Valid("Set".into()));
//! assert_eq!(confirmed.exit_value().map(String::as_str), Some("Set"));
//! ```

pub mod checkpoint;
pub mod core;
pub mod effects;
pub mod step;

// Re-export commonly used types
pub use crate::core::{Message, MessageLog};
pub use effects::Cmd;
pub use step::{as_update_function, fold_steps, Step, UnexpectedExit};
