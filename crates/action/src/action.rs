//! Core action trait and completion signal.
//!
//! This module defines the [`Action`] trait, the fundamental abstraction
//! for one unit of multi-tick behavior, and the [`Completion`] flag through
//! which an action tells its driver that it is done. Concrete action types
//! override only the hooks they need; every hook defaults to a no-op.

use crate::error::ActionResult;

/// A unit of behavior with enter/update/exit lifecycle hooks.
///
/// An action is driven through a fixed shape: `on_enter` once, then one
/// `on_update` per step value until the action marks its [`Completion`],
/// then `on_exit` once. Actions typically mutate external state captured
/// at construction (an entity's position, an animation frame) and decide
/// inside `on_update` when they are finished.
///
/// An action instance is single use: once driven to completion it cannot
/// be entered again.
pub trait Action {
    /// Called exactly once when the action becomes current.
    ///
    /// Completing here means the action finishes without ever receiving a
    /// step value.
    fn on_enter(&mut self, _completion: &mut Completion) -> ActionResult {
        Ok(())
    }

    /// Called once per tick with the tick's step value (typically seconds
    /// of elapsed time, non-negative).
    ///
    /// The default body never completes, so an action that does not
    /// override this hook waits forever.
    fn on_update(&mut self, _dt: f64, _completion: &mut Completion) -> ActionResult {
        Ok(())
    }

    /// Called exactly once after the completion flag is observed.
    fn on_exit(&mut self) -> ActionResult {
        Ok(())
    }
}

/// Blanket implementation for boxed actions.
///
/// This allows `Box<dyn Action>` to also implement `Action`, enabling
/// dynamic dispatch and heterogeneous script steps.
impl Action for Box<dyn Action> {
    #[inline]
    fn on_enter(&mut self, completion: &mut Completion) -> ActionResult {
        (**self).on_enter(completion)
    }

    #[inline]
    fn on_update(&mut self, dt: f64, completion: &mut Completion) -> ActionResult {
        (**self).on_update(dt, completion)
    }

    #[inline]
    fn on_exit(&mut self) -> ActionResult {
        (**self).on_exit()
    }
}

/// Idempotent finished flag for one action run.
///
/// The lifecycle driver owns the flag and lends it to `on_enter` and
/// `on_update`. Setting it does not interrupt the current hook: the driver
/// checks the flag at the top of its loop, so completion requested during
/// an update lets that update finish and suppresses any further ones, and
/// completion requested during `on_enter` means no update runs at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    finished: bool,
}

impl Completion {
    /// Creates a fresh, unfinished flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the action finished. Idempotent: further calls are no-ops.
    #[inline]
    pub fn complete(&mut self) {
        self.finished = true;
    }

    /// Returns `true` once [`complete`](Self::complete) has been called.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.finished
    }
}
