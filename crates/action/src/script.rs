//! Caller-authored action lists.
//!
//! A [`Script`] is the unit of work handed to a scheduler: an ordered list
//! of steps executed strictly one after another. Each step is either an
//! action (driven through its full lifecycle, spanning as many ticks as it
//! needs) or an immediate call (ordinary code running between actions
//! without consuming a tick). Sequencing needs no bookkeeping in caller
//! code — "which action is active" falls out of the list position.

use std::collections::VecDeque;

use crate::action::Action;
use crate::error::ActionResult;
use crate::routine::Routine;

/// One statement of a script.
pub(crate) enum ScriptStep {
    /// An action driven from `on_enter` to `on_exit` before the script
    /// advances.
    Action(Box<dyn Action>),

    /// An immediate fallible call; its error fails the whole procedure.
    Call(Box<dyn FnOnce() -> ActionResult>),
}

/// An ordered list of steps executed one after another.
///
/// Scripts are built once with [`Script::builder`] and consumed when
/// started. An empty script is legal and completes immediately.
pub struct Script {
    pub(crate) steps: VecDeque<ScriptStep>,
}

impl Script {
    /// Starts building a script.
    pub fn builder() -> ScriptBuilder {
        ScriptBuilder {
            steps: VecDeque::new(),
        }
    }

    /// Number of steps remaining in the script.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builder for [`Script`].
///
/// Steps run in the order they are added.
pub struct ScriptBuilder {
    steps: VecDeque<ScriptStep>,
}

impl ScriptBuilder {
    /// Appends an action step.
    pub fn action(mut self, action: impl Action + 'static) -> Self {
        self.steps.push_back(ScriptStep::Action(Box::new(action)));
        self
    }

    /// Appends an immediate call running between actions.
    pub fn call(mut self, call: impl FnOnce() -> ActionResult + 'static) -> Self {
        self.steps.push_back(ScriptStep::Call(Box::new(call)));
        self
    }

    /// Appends a whole script as a single nested step.
    ///
    /// Shorthand for `.action(Routine::new(script))`.
    pub fn script(self, script: Script) -> Self {
        self.action(Routine::new(script))
    }

    /// Finishes the script.
    pub fn build(self) -> Script {
        Script { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Completion;

    struct Noop;
    impl Action for Noop {}

    #[test]
    fn builder_preserves_step_order_and_count() {
        let script = Script::builder()
            .action(Noop)
            .call(|| Ok(()))
            .action(Noop)
            .build();

        assert_eq!(script.len(), 3);
        assert!(matches!(script.steps[0], ScriptStep::Action(_)));
        assert!(matches!(script.steps[1], ScriptStep::Call(_)));
        assert!(matches!(script.steps[2], ScriptStep::Action(_)));
    }

    #[test]
    fn empty_script_is_legal() {
        let script = Script::builder().build();
        assert!(script.is_empty());
    }

    #[test]
    fn boxed_actions_can_be_added_via_blanket_impl() {
        let boxed: Box<dyn Action> = Box::new(Noop);
        let script = Script::builder().action(boxed).build();
        assert_eq!(script.len(), 1);

        // The blanket impl forwards hooks through the box.
        let mut completion = Completion::new();
        let mut action: Box<dyn Action> = Box::new(Noop);
        assert!(action.on_update(0.1, &mut completion).is_ok());
    }
}
