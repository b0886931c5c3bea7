//! The suspendable-procedure substrate.
//!
//! Rust has no first-class stack suspension, so a procedure is an explicit
//! state machine: the not-yet-run remainder of its script plus the
//! lifecycle of the action currently awaiting step values. [`start`]
//! (Procedure::start) and [`resume`](Procedure::resume) both run the
//! machine forward on the calling thread until it parks at the next
//! suspension point, drains its script, or fails. Exactly one procedure
//! executes at any instant; there is no preemption and no locking.

use std::collections::VecDeque;

use crate::error::{ActionError, ProcedureError};
use crate::lifecycle::Lifecycle;
use crate::script::{Script, ScriptStep};
use crate::state::State;

/// A started script: the resumable unit a scheduler owns.
///
/// While [`State::Suspended`], exactly one action is awaiting its next
/// step value; feeding one in with [`resume`](Procedure::resume) runs
/// everything up to the next suspension point, which may cross several
/// script steps (exiting one action, running calls, entering the next).
pub struct Procedure {
    steps: VecDeque<ScriptStep>,
    current: Option<Lifecycle>,
    state: State,
}

impl Procedure {
    /// Starts `script` immediately on the calling thread.
    ///
    /// Runs call steps and enters actions until one awaits its first step
    /// value (the procedure is then [`State::Suspended`]) or the script
    /// drains ([`State::Completed`]).
    ///
    /// # Errors
    ///
    /// A failure before the first suspension is returned to the caller and
    /// no procedure exists afterwards.
    pub fn start(script: Script) -> Result<Self, ActionError> {
        let mut procedure = Self {
            steps: script.steps,
            current: None,
            state: State::Suspended,
        };
        procedure.advance()?;
        Ok(procedure)
    }

    /// Current execution state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Supplies one step value to the awaiting action and runs the
    /// procedure forward to its next suspension point.
    ///
    /// # Errors
    ///
    /// [`ProcedureError::Terminal`] if the procedure already completed or
    /// failed — resuming a terminal procedure is a programming error and
    /// fails fast. A hook or call failure marks the procedure
    /// [`State::Failed`] and is returned.
    pub fn resume(&mut self, dt: f64) -> Result<State, ProcedureError> {
        if self.state.is_terminal() {
            return Err(ProcedureError::Terminal);
        }
        match self.step(dt) {
            Ok(state) => Ok(state),
            Err(err) => {
                self.state = State::Failed;
                self.current = None;
                Err(ProcedureError::Action(err))
            }
        }
    }

    /// Feeds `dt` to the current action, then advances past it if it
    /// finished.
    fn step(&mut self, dt: f64) -> Result<State, ActionError> {
        // Invariant: a suspended procedure always has a current action.
        if let Some(current) = self.current.as_mut() {
            if current.update(dt)? == State::Suspended {
                return Ok(State::Suspended);
            }
            self.current = None;
        }
        self.advance()
    }

    /// Runs call steps and zero-update actions until an action awaits a
    /// step value or the script drains.
    fn advance(&mut self) -> Result<State, ActionError> {
        loop {
            match self.steps.pop_front() {
                None => {
                    self.state = State::Completed;
                    return Ok(State::Completed);
                }
                Some(ScriptStep::Call(call)) => call()?,
                Some(ScriptStep::Action(action)) => {
                    let mut lifecycle = Lifecycle::new(action);
                    if lifecycle.enter()? == State::Suspended {
                        self.current = Some(lifecycle);
                        self.state = State::Suspended;
                        return Ok(State::Suspended);
                    }
                    // Completed during on_enter: continue to the next step.
                }
            }
        }
    }
}
