//! Threading a sequence of messages through an update function.

use super::Step;
use crate::effects::Cmd;
use tracing::trace;

impl<S, M, A, Env> Step<S, M, A, Env> {
    /// Continue a `To` step with `f`, keeping its commands.
    ///
    /// The commands accumulated so far are attached to the continuation's
    /// step as one more batch, after the continuation's own commands. If the
    /// continuation stays or exits, those commands are dropped with it.
    pub(crate) fn and_then<S2, F>(self, f: F) -> Step<S2, M, A, Env>
    where
        F: FnOnce(S) -> Step<S2, M, A, Env>,
    {
        match self {
            Step::To(state, cmds) => f(state).with_cmd(cmds),
            Step::Exit(value) => Step::Exit(value),
            Step::Stay => Step::Stay,
        }
    }
}

/// Replay `messages` through `update`, starting from `initial`.
///
/// Each message is applied to the state reached by the previous one. The
/// fold stops at the first `Stay` or `Exit` and returns it: messages after
/// that point are never passed to `update`.
///
/// # Example
///
/// ```rust
/// use stepwise::{fold_steps, Cmd, Step};
///
/// fn update(delta: i32, total: &i32) -> Step<i32, i32, ()> {
///     if delta == 0 {
///         Step::exit(())
///     } else {
///         Step::to(total + delta)
///     }
/// }
///
/// let step = fold_steps(update, (0, Cmd::none()), vec![1, 2, 3]);
/// assert_eq!(step.state(), Some(&6));
///
/// let step = fold_steps(update, (0, Cmd::none()), vec![1, 0, 3]);
/// assert!(step.is_exit());
/// ```
pub fn fold_steps<S, M, A, Env, F, I>(
    mut update: F,
    initial: (S, Cmd<M, Env>),
    messages: I,
) -> Step<S, M, A, Env>
where
    F: FnMut(M, &S) -> Step<S, M, A, Env>,
    I: IntoIterator<Item = M>,
{
    let mut step = Step::from_update(initial);

    for (index, message) in messages.into_iter().enumerate() {
        if !step.is_to() {
            trace!(index, exited = step.is_exit(), "fold stopped early");
            break;
        }
        step = step.and_then(|state| update(message, &state));
    }

    step
}
