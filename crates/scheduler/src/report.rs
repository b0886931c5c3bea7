//! Structured per-tick failure reporting.

use action::ProcedureError;

use crate::scheduler::TaskId;

/// A failure raised by one procedure during a tick.
#[derive(Debug)]
pub struct TaskFailure {
    /// The task that failed and was removed from the live collection.
    pub task: TaskId,
    /// The error its resumption returned.
    pub error: ProcedureError,
}

/// Everything the scheduler observed during one [`update`] call.
///
/// Each failure has already been logged by the time the report is
/// returned; the report is the structured channel for callers that want
/// to react to failed chains (compensating actions, despawns, retries of
/// their own design).
///
/// [`update`]: crate::Scheduler::update
#[derive(Debug, Default)]
pub struct TickReport {
    /// Failures in the order they occurred, at most one per procedure.
    pub failures: Vec<TaskFailure>,
}

impl TickReport {
    /// Returns `true` if every resumed procedure either suspended or
    /// completed normally.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
