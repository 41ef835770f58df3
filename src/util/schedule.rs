//! Cancellable one-shot timers.
//!
//! The toast controller never talks to `setTimeout` directly; it asks a
//! `Scheduler` for a task and keeps the returned `TaskHandle`. Cancelling the
//! handle guarantees the callback will not run.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::time::Duration;

use crate::error::UiError;

pub type TaskCallback = Box<dyn FnOnce() + 'static>;

/// Handle to a pending one-shot callback.
#[must_use = "a dropped handle can no longer cancel its task"]
pub struct TaskHandle {
    cancel: Box<dyn FnOnce() + 'static>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Box::new(cancel) }
    }

    pub fn cancel(self) {
        (self.cancel)();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TaskHandle")
    }
}

pub trait Scheduler {
    fn schedule(&self, delay: Duration, callback: TaskCallback) -> Result<TaskHandle, UiError>;
}

/// Longest delay `setTimeout` honors. Larger values wrap to a negative
/// `i32` and fire immediately.
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX.unsigned_abs();

/// Clamp a delay to the millisecond range accepted by `setTimeout`.
#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMER_DELAY_MS, |ms| ms.min(MAX_TIMER_DELAY_MS))
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: TaskCallback) -> Result<TaskHandle, UiError> {
        let timeout = gloo_timers::callback::Timeout::new(delay_millis(delay), callback);
        Ok(TaskHandle::new(move || drop(timeout.cancel())))
    }
}
