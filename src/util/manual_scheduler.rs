//! Virtual-time scheduler for native tests.
//!
//! Time only moves when `advance` is called. Due callbacks run in deadline
//! order, ties broken by scheduling order, with no internal borrow held.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::schedule::{Scheduler, TaskCallback, TaskHandle};
use crate::error::UiError;

struct Entry {
    id: u64,
    due: Duration,
    callback: TaskCallback,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
    cancelled: usize,
    fail_next: Option<String>,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: TaskCallback) -> Result<TaskHandle, UiError> {
        let mut clock = self.clock.borrow_mut();
        if let Some(reason) = clock.fail_next.take() {
            return Err(UiError::Schedule(reason));
        }
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.entries.push(Entry { id, due, callback });

        let weak = Rc::downgrade(&self.clock);
        Ok(TaskHandle::new(move || {
            if let Some(clock) = weak.upgrade() {
                let mut clock = clock.borrow_mut();
                let before = clock.entries.len();
                clock.entries.retain(|e| e.id != id);
                if clock.entries.len() < before {
                    clock.cancelled += 1;
                }
            }
        }))
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Callbacks scheduled but neither run nor cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Tasks removed by `TaskHandle::cancel` before they ran.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.clock.borrow().cancelled
    }

    /// Make the next `schedule` call fail with `reason`.
    pub fn fail_next(&self, reason: &str) {
        self.clock.borrow_mut().fail_next = Some(reason.to_owned());
    }

    /// Move virtual time forward, running every callback that comes due.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.borrow().now + by;
        let mut fired = 0;
        while let Some(entry) = self.pop_due(target) {
            self.clock.borrow_mut().now = entry.due;
            (entry.callback)();
            fired += 1;
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<Entry> {
        let mut clock = self.clock.borrow_mut();
        let idx = clock
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        Some(clock.entries.remove(idx))
    }
}
