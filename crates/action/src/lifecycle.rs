//! Per-action lifecycle driver.
//!
//! [`Lifecycle`] is the explicit-state form of an action's driving loop:
//! run `on_enter` once, feed one `on_update` per step value until the
//! completion flag is set, then run `on_exit` once. The flag is checked
//! after every hook returns, never mid-hook.

use crate::action::{Action, Completion};
use crate::error::ActionError;
use crate::state::State;

/// Progress stages of one action run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Constructed, `on_enter` not yet called.
    Fresh,
    /// Entered and awaiting step values.
    Active,
    /// `on_exit` ran; the action is spent.
    Done,
}

/// Drives one boxed action from entry to exit.
///
/// The lifecycle owns the action and its [`Completion`] flag. Both `enter`
/// and `update` report where the action now stands: [`State::Suspended`]
/// while it awaits further step values, [`State::Completed`] once `on_exit`
/// has run.
pub struct Lifecycle {
    action: Box<dyn Action>,
    completion: Completion,
    stage: Stage,
}

impl Lifecycle {
    /// Wraps an action for driving. Nothing runs until [`enter`](Self::enter).
    pub fn new(action: Box<dyn Action>) -> Self {
        Self {
            action,
            completion: Completion::new(),
            stage: Stage::Fresh,
        }
    }

    /// Runs `on_enter` exactly once.
    ///
    /// When `on_enter` requests completion, `on_exit` runs immediately and
    /// the action finishes with zero updates; otherwise the action is left
    /// awaiting step values.
    ///
    /// # Errors
    ///
    /// [`ActionError::Reentered`] if the lifecycle already ran — an action
    /// instance is single use. Hook failures propagate unchanged.
    pub fn enter(&mut self) -> Result<State, ActionError> {
        if self.stage != Stage::Fresh {
            return Err(ActionError::Reentered);
        }
        self.stage = Stage::Active;
        self.action.on_enter(&mut self.completion)?;
        self.settle()
    }

    /// Feeds one step value to `on_update`.
    ///
    /// # Errors
    ///
    /// [`ActionError::NotActive`] if the action was never entered or has
    /// already exited. Hook failures propagate unchanged.
    pub fn update(&mut self, dt: f64) -> Result<State, ActionError> {
        if self.stage != Stage::Active {
            return Err(ActionError::NotActive);
        }
        self.action.on_update(dt, &mut self.completion)?;
        self.settle()
    }

    /// Loop-top check of the completion flag; runs `on_exit` when set.
    fn settle(&mut self) -> Result<State, ActionError> {
        if self.completion.is_complete() {
            self.stage = Stage::Done;
            self.action.on_exit()?;
            Ok(State::Completed)
        } else {
            Ok(State::Suspended)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActionResult;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    /// Completes after a fixed number of updates, recording every hook call.
    struct Counted {
        remaining: u32,
        log: Log,
    }

    impl Action for Counted {
        fn on_enter(&mut self, completion: &mut Completion) -> ActionResult {
            self.log.borrow_mut().push("enter");
            if self.remaining == 0 {
                completion.complete();
            }
            Ok(())
        }

        fn on_update(&mut self, _dt: f64, completion: &mut Completion) -> ActionResult {
            self.log.borrow_mut().push("update");
            self.remaining -= 1;
            if self.remaining == 0 {
                completion.complete();
            }
            Ok(())
        }

        fn on_exit(&mut self) -> ActionResult {
            self.log.borrow_mut().push("exit");
            Ok(())
        }
    }

    fn counted(remaining: u32) -> (Lifecycle, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let lifecycle = Lifecycle::new(Box::new(Counted {
            remaining,
            log: log.clone(),
        }));
        (lifecycle, log)
    }

    #[test]
    fn hooks_fire_in_order_with_one_update_per_step() {
        let (mut lifecycle, log) = counted(2);

        assert_eq!(lifecycle.enter().unwrap(), State::Suspended);
        assert_eq!(lifecycle.update(0.1).unwrap(), State::Suspended);
        assert_eq!(lifecycle.update(0.1).unwrap(), State::Completed);
        assert_eq!(*log.borrow(), vec!["enter", "update", "update", "exit"]);
    }

    #[test]
    fn completing_in_enter_skips_updates() {
        let (mut lifecycle, log) = counted(0);

        assert_eq!(lifecycle.enter().unwrap(), State::Completed);
        assert_eq!(*log.borrow(), vec!["enter", "exit"]);
    }

    #[test]
    fn reentering_a_finished_action_fails_fast() {
        let (mut lifecycle, _log) = counted(0);

        lifecycle.enter().unwrap();
        assert_eq!(lifecycle.enter(), Err(ActionError::Reentered));
    }

    #[test]
    fn updating_outside_the_active_stage_fails_fast() {
        let (mut lifecycle, _log) = counted(1);

        // Before enter.
        assert_eq!(lifecycle.update(0.1), Err(ActionError::NotActive));

        lifecycle.enter().unwrap();
        lifecycle.update(0.1).unwrap();

        // After exit.
        assert_eq!(lifecycle.update(0.1), Err(ActionError::NotActive));
    }

    #[test]
    fn double_complete_exits_exactly_once() {
        struct Eager {
            log: Log,
        }
        impl Action for Eager {
            fn on_update(&mut self, _dt: f64, completion: &mut Completion) -> ActionResult {
                completion.complete();
                completion.complete();
                Ok(())
            }
            fn on_exit(&mut self) -> ActionResult {
                self.log.borrow_mut().push("exit");
                Ok(())
            }
        }

        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut lifecycle = Lifecycle::new(Box::new(Eager { log: log.clone() }));
        lifecycle.enter().unwrap();
        assert_eq!(lifecycle.update(0.1).unwrap(), State::Completed);
        assert_eq!(*log.borrow(), vec!["exit"]);
    }

    #[test]
    fn hook_failures_propagate() {
        struct Broken;
        impl Action for Broken {
            fn on_update(&mut self, _dt: f64, _completion: &mut Completion) -> ActionResult {
                Err(ActionError::failed("out of mana"))
            }
        }

        let mut lifecycle = Lifecycle::new(Box::new(Broken));
        lifecycle.enter().unwrap();
        assert_eq!(
            lifecycle.update(0.1),
            Err(ActionError::Failed("out of mana".into()))
        );
    }
}
