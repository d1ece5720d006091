//! Converting steps back into the host's `(state, cmd)` convention.

use super::Step;
use crate::effects::Cmd;
use std::convert::Infallible;
use thiserror::Error;
use tracing::trace;

/// A step exited where the caller expected a transition or a stay.
///
/// Returned by [`Step::try_run`]; carries the exit value so it is not lost.
#[derive(Debug, Error, PartialEq)]
#[error("step exited where a transition or stay was expected")]
pub struct UnexpectedExit<A> {
    pub value: A,
}

impl<S, M, Env> Step<S, M, Infallible, Env> {
    /// Hand a step that can never exit to the host.
    ///
    /// Returns `Some((state, cmd))` for `To` and `None` for `Stay`, in which
    /// case the host keeps its current state and schedules nothing.
    pub fn run(self) -> Option<(S, Cmd<M, Env>)> {
        match self {
            Step::To(state, cmd) => Some((state, cmd)),
            Step::Stay => None,
            Step::Exit(never) => match never {},
        }
    }
}

impl<S, M, A, Env> Step<S, M, A, Env> {
    /// Like [`Step::run`], for steps whose exit type is inhabited.
    ///
    /// Exiting here breaks the caller's contract; the exit value is returned
    /// in the error instead of being dropped.
    pub fn try_run(self) -> Result<Option<(S, Cmd<M, Env>)>, UnexpectedExit<A>> {
        match self {
            Step::To(state, cmd) => Ok(Some((state, cmd))),
            Step::Stay => Ok(None),
            Step::Exit(value) => Err(UnexpectedExit { value }),
        }
    }
}

/// Adapt a step-returning update function to the host's plain signature.
///
/// The returned function passes the state back unchanged, with no effects,
/// whenever `update` stays.
///
/// # Example
///
/// ```rust
/// use stepwise::{as_update_function, Step};
/// use std::convert::Infallible;
///
/// let update = as_update_function(|delta: i32, total: &i32| -> Step<i32, i32, Infallible> {
///     if delta == 0 {
///         Step::stay()
///     } else {
///         Step::to(total + delta)
///     }
/// });
///
/// assert_eq!(update(2, 40).0, 42);
/// assert_eq!(update(0, 40).0, 40);
/// ```
pub fn as_update_function<S, M, Env, F>(update: F) -> impl Fn(M, S) -> (S, Cmd<M, Env>)
where
    F: Fn(M, &S) -> Step<S, M, Infallible, Env>,
{
    move |message: M, state: S| match update(message, &state).run() {
        Some(next) => next,
        None => {
            trace!("update stayed, keeping current state");
            (state, Cmd::none())
        }
    }
}
