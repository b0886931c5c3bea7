//! Suspendable action procedures for cooperative step-driven scheduling.
//!
//! This library lets a caller describe a chain of logically blocking
//! operations as one linear script, and lets a driving loop advance that
//! script one discrete time-step at a time — with no hand-written state
//! machine in caller code.
//!
//! - **Single suspension point**: a procedure pauses only while an action
//!   awaits its next step value
//! - **Sequencing for free**: chained actions run strictly one after
//!   another because a script is an ordered list of steps
//! - **Structured failures**: every hook returns a `Result`; one
//!   procedure's failure never leaks into another
//!
//! # Architecture
//!
//! - [`Action`]: lifecycle trait with `on_enter` / `on_update` / `on_exit`
//!   hooks and a [`Completion`] signal
//! - [`Lifecycle`]: drives one action from entry to exit
//! - [`Script`]: caller-authored ordered list of actions and calls
//! - [`Procedure`]: a started script — the resumable unit a scheduler owns
//! - [`Routine`]: embeds a whole script as a single action for nesting

pub mod action;
pub mod error;
pub mod lifecycle;
pub mod procedure;
pub mod routine;
pub mod script;
pub mod state;

// Re-export core types for ergonomic API
pub use action::{Action, Completion};
pub use error::{ActionError, ActionResult, ProcedureError};
pub use lifecycle::Lifecycle;
pub use procedure::Procedure;
pub use routine::Routine;
pub use script::{Script, ScriptBuilder};
pub use state::State;
