//! The live-procedure collection and its tick driver.

use action::{ActionError, Procedure, Script, State};

use crate::report::{TaskFailure, TickReport};

/// Identifier for a submitted procedure, unique within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// One live entry: a started procedure and its id.
struct Entry {
    id: TaskId,
    procedure: Procedure,
}

/// Owns every live procedure and advances them once per external tick.
///
/// Entries are kept in submission order and resumed in that order; the
/// scheduler never reorders or prioritizes them. Because `update` takes
/// `&mut self`, nothing can submit new procedures from inside a running
/// hook — submissions made between ticks join the next tick, keeping
/// per-tick work bounded by the collection size at the start of the tick.
///
/// Independent schedulers are fully isolated from each other.
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Starts `script` immediately, running it to its first suspension,
    /// and appends it to the live collection.
    ///
    /// A script that finishes without suspending is still appended and is
    /// reaped on the next [`update`](Self::update) without being resumed.
    ///
    /// # Errors
    ///
    /// A failure before the first suspension is logged and returned; the
    /// procedure never joins the collection.
    pub fn submit(&mut self, script: Script) -> Result<TaskId, ActionError> {
        let procedure = match Procedure::start(script) {
            Ok(procedure) => procedure,
            Err(err) => {
                tracing::error!("submitted procedure failed before first suspension: {err}");
                return Err(err);
            }
        };

        let id = TaskId(self.next_id);
        self.next_id += 1;
        tracing::debug!("task {:?} submitted ({})", id, procedure.state().as_str());
        self.entries.push(Entry { id, procedure });
        Ok(id)
    }

    /// Resumes every live procedure once with `dt`, in submission order,
    /// and removes the ones that completed or failed.
    ///
    /// A failing procedure is logged, recorded in the returned
    /// [`TickReport`], and removed — its siblings are still resumed on
    /// this very tick. Surviving entries keep their relative order.
    pub fn update(&mut self, dt: f64) -> TickReport {
        let mut report = TickReport::default();

        let mut index = 0;
        while index < self.entries.len() {
            // Scripts that finished during submit are reaped without a
            // resume; resuming a terminal procedure is a misuse error.
            if self.entries[index].procedure.state().is_terminal() {
                self.entries.remove(index);
                continue;
            }

            let id = self.entries[index].id;
            match self.entries[index].procedure.resume(dt) {
                Ok(State::Suspended) => index += 1,
                // Resume only ever returns Suspended or Completed.
                Ok(_) => {
                    tracing::debug!("task {:?} completed", id);
                    self.entries.remove(index);
                }
                Err(error) => {
                    tracing::error!("task {:?} failed: {error}", id);
                    report.failures.push(TaskFailure { task: id, error });
                    self.entries.remove(index);
                }
            }
        }

        report
    }

    /// Number of live procedures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no procedures are live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `task` is still in the live collection.
    pub fn contains(&self, task: TaskId) -> bool {
        self.entries.iter().any(|entry| entry.id == task)
    }

    /// Live task ids in their current (submission) order.
    pub fn tasks(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
