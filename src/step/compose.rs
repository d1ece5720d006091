//! Combinators that re-shape steps produced by nested update functions.

use super::Step;

impl<S, M, A, Env> Step<S, M, A, Env> {
    /// Apply `f` to the destination state of a `To` step.
    ///
    /// Used to embed a sub-machine's state in the parent's state type.
    pub fn map<S2, F>(self, f: F) -> Step<S2, M, A, Env>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Step::To(state, cmd) => Step::To(f(state), cmd),
            Step::Exit(value) => Step::Exit(value),
            Step::Stay => Step::Stay,
        }
    }

    /// Apply `f` to the exit value of an `Exit` step.
    pub fn map_exit<A2, F>(self, f: F) -> Step<S, M, A2, Env>
    where
        F: FnOnce(A) -> A2,
    {
        match self {
            Step::To(state, cmd) => Step::To(state, cmd),
            Step::Exit(value) => Step::Exit(f(value)),
            Step::Stay => Step::Stay,
        }
    }

    /// Merge two alternative outcomes, giving `second` priority.
    ///
    /// | `self` \ `second` | `To(s2)` | `Stay`   | `Exit(o2)` |
    /// |-------------------|----------|----------|------------|
    /// | `To(s1)`          | `To(s2)` | `To(s1)` | `Exit(o2)` |
    /// | `Stay`            | `To(s2)` | `Stay`   | `Exit(o2)` |
    /// | `Exit(o1)`        | `Exit(o1)` | `Exit(o1)` | `Exit(o2)` |
    ///
    /// An exit wins over anything that is not an exit, `To` wins over `Stay`,
    /// and ties go to `second`. An exit already held by `self` can only be
    /// replaced by another exit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::Step;
    ///
    /// let inner: Step<&str, (), Option<u32>> = Step::to("editing");
    /// let cancel: Step<&str, (), Option<u32>> = Step::exit(None);
    ///
    /// assert!(inner.or_else(cancel).is_exit());
    /// ```
    pub fn or_else(self, second: Self) -> Self {
        match (self, second) {
            (_, second @ Step::Exit(_)) => second,
            (first @ Step::Exit(_), _) => first,
            (first, Step::Stay) => first,
            (_, second) => second,
        }
    }

    /// Continue with `f` once the step exits.
    ///
    /// `To` and `Stay` pass through untouched, so the state and message types
    /// must already line up with what `f` returns. This is the seam for
    /// sequencing one sub-interaction after another.
    pub fn on_exit<A2, F>(self, f: F) -> Step<S, M, A2, Env>
    where
        F: FnOnce(A) -> Step<S, M, A2, Env>,
    {
        match self {
            Step::To(state, cmd) => Step::To(state, cmd),
            Step::Exit(value) => f(value),
            Step::Stay => Step::Stay,
        }
    }
}

impl<S, M, A, Env> Step<S, M, A, Env>
where
    M: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Re-tag the messages of every pending effect with `f`.
    ///
    /// Used to wrap a sub-machine's messages in the parent's message type.
    pub fn map_msg<M2, F>(self, f: F) -> Step<S, M2, A, Env>
    where
        M2: Send + 'static,
        F: Fn(M) -> M2 + Send + Sync + 'static,
    {
        match self {
            Step::To(state, cmd) => Step::To(state, cmd.map(f)),
            Step::Exit(value) => Step::Exit(value),
            Step::Stay => Step::Stay,
        }
    }
}
