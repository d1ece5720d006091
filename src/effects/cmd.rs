//! Ordered batches of deferred effects.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// A single deferred effect that resolves to a message.
///
/// Command effects cannot fail. Fallible work is converted into a message
/// when the command is built (see [`Cmd::attempt`]).
pub type CmdEffect<M, Env> = BoxedEffect<M, Infallible, Env>;

/// An ordered batch of effects, each eventually producing a message `M`.
///
/// A `Cmd` is opaque to this crate: it is accumulated, re-tagged and
/// concatenated, but never executed. The host runtime takes the effects out
/// with [`Cmd::into_effects`] and runs them against its environment `Env`.
///
/// # Example
///
/// ```rust
/// use stepwise::effects::Cmd;
///
/// let cmd: Cmd<&str> = Cmd::batch([Cmd::message("a"), Cmd::none(), Cmd::message("b")]);
/// assert_eq!(cmd.len(), 2);
/// ```
pub struct Cmd<M, Env = ()> {
    effects: Vec<CmdEffect<M, Env>>,
}

impl<M, Env> Cmd<M, Env> {
    /// An empty batch.
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Concatenate commands, keeping the order of the input and of the
    /// effects inside each command.
    pub fn batch<I>(cmds: I) -> Self
    where
        I: IntoIterator<Item = Cmd<M, Env>>,
    {
        Self {
            effects: cmds.into_iter().flat_map(|cmd| cmd.effects).collect(),
        }
    }

    /// Number of effects in the batch.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Hand the effects over to the host, in attachment order.
    pub fn into_effects(self) -> Vec<CmdEffect<M, Env>> {
        self.effects
    }

    /// Append `other` after the effects already in this batch.
    pub(crate) fn append(mut self, other: Cmd<M, Env>) -> Self {
        self.effects.extend(other.effects);
        self
    }
}

impl<M, Env> Cmd<M, Env>
where
    M: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Wrap one infallible effect as a command.
    pub fn perform<E>(effect: E) -> Self
    where
        E: Effect<Output = M, Error = Infallible, Env = Env> + 'static,
    {
        Self {
            effects: vec![effect.boxed()],
        }
    }

    /// A command that yields `message` as soon as the host runs it.
    pub fn message(message: M) -> Self {
        Self::perform(pure::<M, Infallible, Env>(message))
    }

    /// Run a fallible `task` and turn either outcome into a message.
    ///
    /// The handler sees the task's `Result` untouched, so task failures reach
    /// the update function as ordinary messages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::effects::Cmd;
    /// use stillwater::prelude::*;
    ///
    /// #[derive(Debug)]
    /// enum Msg {
    ///     Loaded(Result<u32, String>),
    /// }
    ///
    /// let cmd: Cmd<Msg> = Cmd::attempt(pure::<u32, String, ()>(7), Msg::Loaded);
    /// assert_eq!(cmd.len(), 1);
    /// ```
    pub fn attempt<T, E, Task, F>(task: Task, handler: F) -> Self
    where
        Task: Effect<Output = T, Error = E, Env = Env> + 'static,
        F: FnOnce(Result<T, E>) -> M + Send + 'static,
    {
        Self::perform(from_async(move |env: &Env| {
            let env = env.clone();
            async move {
                let result = task.run(&env).await;
                Ok::<M, Infallible>(handler(result))
            }
        }))
    }

    /// Re-tag every eventual message with `f`.
    ///
    /// Nothing runs here; each effect is wrapped so that the host receives
    /// `f(message)` instead of `message`.
    pub fn map<M2, F>(self, f: F) -> Cmd<M2, Env>
    where
        M2: Send + 'static,
        F: Fn(M) -> M2 + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Cmd {
            effects: self
                .effects
                .into_iter()
                .map(|effect| {
                    let f = Arc::clone(&f);
                    effect.map(move |message| f(message)).boxed()
                })
                .collect(),
        }
    }
}

impl<M, Env> Default for Cmd<M, Env> {
    fn default() -> Self {
        Self::none()
    }
}

impl<M, Env> fmt::Debug for Cmd<M, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd")
            .field("effects", &self.effects.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Run every effect in order against `env`, collecting the messages.
    pub(crate) async fn collect<M, Env>(cmd: Cmd<M, Env>, env: &Env) -> Vec<M>
    where
        M: Send + 'static,
        Env: Clone + Send + Sync + 'static,
    {
        let mut messages = Vec::new();
        for effect in cmd.into_effects() {
            match effect.run(env).await {
                Ok(message) => messages.push(message),
                Err(never) => match never {},
            }
        }
        messages
    }
}
