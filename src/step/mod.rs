//! The `Step` type: the outcome of a single state transition.
//!
//! An update function returns a [`Step`] instead of a bare `(state, cmd)`
//! tuple. Steps produced by nested update functions (sub-machines) are
//! re-shaped with the combinators in this module until they fit the
//! enclosing update function, and the outermost step is turned back into
//! the host's `(state, cmd)` convention with [`Step::run`].
//!
//! Every combinator consumes its step and returns a new one. Nothing here
//! runs effects; they are carried along in a [`Cmd`].

mod compose;
mod fold;
mod run;

pub use fold::fold_steps;
pub use run::{as_update_function, UnexpectedExit};

use crate::effects::Cmd;
use std::convert::Infallible;
use std::fmt;
use stillwater::effect::Effect;

/// Outcome of one state transition.
///
/// - `S` is the state type,
/// - `M` the message type pending effects resolve to,
/// - `A` the exit value type,
/// - `Env` the environment the host runs effects against.
///
/// A step whose exit type is [`Infallible`] can never be `Exit`, which is
/// what lets [`Step::run`] hand its contents to the host without a fallback.
///
/// # Example
///
/// ```rust
/// use stepwise::{Cmd, Step};
/// use std::convert::Infallible;
///
/// #[derive(Debug)]
/// enum Msg {
///     Increment,
///     Reset,
/// }
///
/// fn update(msg: Msg, count: &u32) -> Step<u32, Msg, Infallible> {
///     match msg {
///         Msg::Increment => Step::to(count + 1),
///         Msg::Reset if *count == 0 => Step::stay(),
///         Msg::Reset => Step::to(0).with_cmd(Cmd::message(Msg::Increment)),
///     }
/// }
///
/// let (count, cmd) = update(Msg::Reset, &5).run().unwrap();
/// assert_eq!(count, 0);
/// assert_eq!(cmd.len(), 1);
/// assert!(update(Msg::Reset, &0).run().is_none());
/// ```
pub enum Step<S, M, A, Env = ()> {
    /// Move to a new state and schedule the commands, in order.
    To(S, Cmd<M, Env>),

    /// End the current sub-interaction with a value.
    Exit(A),

    /// Keep the current state; no effects.
    Stay,
}

impl<S, M, A, Env> Step<S, M, A, Env> {
    /// Transition to `state` with no effects.
    pub fn to(state: S) -> Self {
        Step::To(state, Cmd::none())
    }

    /// Keep the current state.
    pub fn stay() -> Self {
        Step::Stay
    }

    /// Leave the sub-interaction with `value`.
    pub fn exit(value: A) -> Self {
        Step::Exit(value)
    }

    /// Lift a plain host update result into a step.
    pub fn from_update((state, cmd): (S, Cmd<M, Env>)) -> Self {
        Step::To(state, cmd)
    }

    /// `To` the state if there is one, otherwise `Stay`.
    pub fn from_option(state: Option<S>) -> Self {
        match state {
            Some(state) => Step::to(state),
            None => Step::Stay,
        }
    }

    /// Attach `cmd` after the commands already scheduled.
    ///
    /// Only a `To` step carries effects: on `Stay` and `Exit` the command is
    /// dropped and the step is returned unchanged.
    pub fn with_cmd(self, cmd: Cmd<M, Env>) -> Self {
        match self {
            Step::To(state, cmds) => Step::To(state, cmds.append(cmd)),
            other => other,
        }
    }

    pub fn is_to(&self) -> bool {
        matches!(self, Step::To(..))
    }

    pub fn is_stay(&self) -> bool {
        matches!(self, Step::Stay)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Step::Exit(_))
    }

    /// The destination state, if this is a `To` step.
    pub fn state(&self) -> Option<&S> {
        match self {
            Step::To(state, _) => Some(state),
            _ => None,
        }
    }

    /// The scheduled commands, if this is a `To` step.
    pub fn cmd(&self) -> Option<&Cmd<M, Env>> {
        match self {
            Step::To(_, cmd) => Some(cmd),
            _ => None,
        }
    }

    /// The exit value, if this is an `Exit` step.
    pub fn exit_value(&self) -> Option<&A> {
        match self {
            Step::Exit(value) => Some(value),
            _ => None,
        }
    }
}

impl<S, M, A, Env> Step<S, M, A, Env>
where
    M: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Attach a single infallible effect. Dropped on `Stay` and `Exit`.
    pub fn with_effect<E>(self, effect: E) -> Self
    where
        E: Effect<Output = M, Error = Infallible, Env = Env> + 'static,
    {
        self.with_cmd(Cmd::perform(effect))
    }

    /// Schedule a fallible `task` whose result is delivered through
    /// `handler`. Dropped on `Stay` and `Exit`, like any other command.
    pub fn with_attempt<T, E, Task, F>(self, handler: F, task: Task) -> Self
    where
        Task: Effect<Output = T, Error = E, Env = Env> + 'static,
        F: FnOnce(Result<T, E>) -> M + Send + 'static,
    {
        self.with_cmd(Cmd::attempt(task, handler))
    }
}

impl<S, M, A, Env> fmt::Debug for Step<S, M, A, Env>
where
    S: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::To(state, cmd) => f.debug_tuple("To").field(state).field(cmd).finish(),
            Step::Exit(value) => f.debug_tuple("Exit").field(value).finish(),
            Step::Stay => f.write_str("Stay"),
        }
    }
}
