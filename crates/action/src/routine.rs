//! Script nesting.

use crate::action::{Action, Completion};
use crate::error::{ActionError, ActionResult, ProcedureError};
use crate::procedure::Procedure;
use crate::script::Script;
use crate::state::State;

/// Runs an embedded script as a single action of an outer script.
///
/// Entering the routine starts the inner procedure immediately, running it
/// to its first suspension, and every step value fed to the routine is
/// forwarded inward. The routine completes when the inner procedure does,
/// so arbitrarily deep nesting composes transparently: the outer script
/// only ever sees one action taking however many ticks it takes.
///
/// An inner failure propagates outward and fails the whole chain of
/// enclosing procedures.
pub struct Routine {
    script: Option<Script>,
    procedure: Option<Procedure>,
}

impl Routine {
    /// Wraps `script` for use as one step of an outer script.
    pub fn new(script: Script) -> Self {
        Self {
            script: Some(script),
            procedure: None,
        }
    }
}

impl Action for Routine {
    fn on_enter(&mut self, completion: &mut Completion) -> ActionResult {
        let script = self.script.take().ok_or(ActionError::Reentered)?;
        let procedure = Procedure::start(script)?;
        if procedure.state().is_terminal() {
            // The inner script finished without suspending.
            completion.complete();
        } else {
            self.procedure = Some(procedure);
        }
        Ok(())
    }

    fn on_update(&mut self, dt: f64, completion: &mut Completion) -> ActionResult {
        let Some(procedure) = self.procedure.as_mut() else {
            return Err(ActionError::NotActive);
        };
        match procedure.resume(dt) {
            Ok(State::Suspended) => Ok(()),
            Ok(_) => {
                completion.complete();
                Ok(())
            }
            Err(ProcedureError::Action(err)) => Err(err),
            Err(ProcedureError::Terminal) => Err(ActionError::NotActive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Tagged {
        name: &'static str,
        remaining: u32,
        log: Log,
    }

    impl Action for Tagged {
        fn on_enter(&mut self, completion: &mut Completion) -> ActionResult {
            self.log.borrow_mut().push(format!("{}:enter", self.name));
            if self.remaining == 0 {
                completion.complete();
            }
            Ok(())
        }

        fn on_update(&mut self, _dt: f64, completion: &mut Completion) -> ActionResult {
            self.log.borrow_mut().push(format!("{}:update", self.name));
            self.remaining -= 1;
            if self.remaining == 0 {
                completion.complete();
            }
            Ok(())
        }

        fn on_exit(&mut self) -> ActionResult {
            self.log.borrow_mut().push(format!("{}:exit", self.name));
            Ok(())
        }
    }

    fn tagged(name: &'static str, remaining: u32, log: &Log) -> Tagged {
        Tagged {
            name,
            remaining,
            log: log.clone(),
        }
    }

    #[test]
    fn nested_script_runs_between_outer_actions() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let inner = Script::builder()
            .action(tagged("inner", 2, &log))
            .build();
        let outer = Script::builder()
            .action(tagged("before", 1, &log))
            .script(inner)
            .action(tagged("after", 1, &log))
            .build();

        let mut procedure = Procedure::start(outer).unwrap();
        let mut ticks = 0;
        while !procedure.state().is_terminal() {
            procedure.resume(0.1).unwrap();
            ticks += 1;
        }

        // before: 1 tick, inner: 2 ticks, after: 1 tick.
        assert_eq!(ticks, 4);
        assert_eq!(
            *log.borrow(),
            vec![
                "before:enter",
                "before:update",
                "before:exit",
                "inner:enter",
                "inner:update",
                "inner:update",
                "inner:exit",
                "after:enter",
                "after:update",
                "after:exit",
            ]
        );
    }

    #[test]
    fn empty_nested_script_completes_without_a_tick() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let outer = Script::builder()
            .script(Script::builder().build())
            .action(tagged("only", 1, &log))
            .build();

        let procedure = Procedure::start(outer).unwrap();
        assert_eq!(procedure.state(), State::Suspended);
        assert_eq!(*log.borrow(), vec!["only:enter"]);
    }

    #[test]
    fn inner_failure_fails_the_outer_procedure() {
        struct Broken;
        impl Action for Broken {
            fn on_update(&mut self, _dt: f64, _completion: &mut Completion) -> ActionResult {
                Err(ActionError::failed("nested failure"))
            }
        }

        let inner = Script::builder().action(Broken).build();
        let outer = Script::builder().script(inner).build();

        let mut procedure = Procedure::start(outer).unwrap();
        assert!(matches!(
            procedure.resume(0.1),
            Err(ProcedureError::Action(ActionError::Failed(_)))
        ));
        assert_eq!(procedure.state(), State::Failed);
    }
}
