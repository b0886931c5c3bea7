//! Cooperative tick scheduler for suspendable action procedures.
//!
//! The scheduler owns every live [`action::Procedure`] submitted to it and
//! advances all of them once per external tick. Failures are isolated:
//! one procedure failing never prevents its siblings from being resumed
//! on the same tick, and each failure is both logged through `tracing`
//! and surfaced structurally in the tick's [`TickReport`].
//!
//! The driving loop (a game frame loop, a simulation step) is the
//! caller's concern; the scheduler only consumes one step value per
//! [`Scheduler::update`] call.

pub mod report;
pub mod scheduler;

pub use report::{TaskFailure, TickReport};
pub use scheduler::{Scheduler, TaskId};
