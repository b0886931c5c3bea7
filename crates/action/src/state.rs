//! Execution state of a resumable unit.

/// Where a resumable unit (an action lifecycle or a whole procedure)
/// stands between two ticks.
///
/// # Cooperative Semantics
///
/// A unit is only ever observed at rest: either parked at its single
/// suspension point waiting for the next step value, or terminal. The
/// transient "currently running" state exists only inside a `start` or
/// `resume` call and is never visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Waiting at the suspension point for the next step value.
    Suspended,

    /// Ran to the end of its work. Terminal.
    Completed,

    /// A hook or call step failed. Terminal.
    Failed,
}

impl State {
    /// Returns `true` if this state is `Suspended`.
    #[inline]
    pub fn is_suspended(self) -> bool {
        matches!(self, State::Suspended)
    }

    /// Returns `true` if this state is `Completed` or `Failed`.
    ///
    /// A terminal unit must never be resumed again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Completed | State::Failed)
    }

    /// Returns a human-readable name for this state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Suspended => "suspended",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}
