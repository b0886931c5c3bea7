//! Error types for actions and procedures.
//!
//! Failures come in two classes. Hook failures ([`ActionError::Failed`])
//! carry whatever reason the action reported and are ordinary runtime
//! outcomes: the owning procedure becomes [`crate::State::Failed`] and is
//! reaped. Misuse failures ([`ActionError::Reentered`],
//! [`ActionError::NotActive`], [`ProcedureError::Terminal`]) indicate a
//! programming error in driving code and fail fast instead of silently
//! doing nothing.

/// Errors raised while driving an action's lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// A lifecycle hook reported a failure.
    #[error("action failed: {0}")]
    Failed(String),

    /// `enter` was called again after the action already ran.
    #[error("action re-entered after completion")]
    Reentered,

    /// `update` was called before `enter` or after completion.
    #[error("action updated outside its active lifecycle")]
    NotActive,
}

impl ActionError {
    /// Creates a hook failure with the given reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

/// Errors raised while driving a procedure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProcedureError {
    /// The procedure was resumed after reaching a terminal state.
    #[error("procedure resumed after termination")]
    Terminal,

    /// A lifecycle hook or call step failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Result alias for lifecycle hooks and call steps.
pub type ActionResult = Result<(), ActionError>;
