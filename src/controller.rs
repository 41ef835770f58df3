//! Toast controller: the single owner of toast state and its dismiss timer.
//!
//! ARCHITECTURE
//! ============
//! One controller is built per page and cloned to whoever needs to raise a
//! toast (the close button, the JS bindings, host code). Clones share state.
//!
//! INVARIANTS
//! ==========
//! - At most one dismiss task is pending. `toast` and `close` cancel the
//!   outstanding task before anything else is scheduled.
//! - Every show/close bumps a generation counter. A dismiss callback only
//!   hides the toast if its generation is still current, so a task that
//!   escaped cancellation cannot hide a newer toast.
//! - The listener runs after the internal borrow is released.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::state::toast::{ToastState, ToastStatus};
use crate::util::schedule::{Scheduler, TaskHandle};

pub type ToastListener = Rc<dyn Fn(&ToastState)>;

#[derive(Default)]
struct Inner {
    state: ToastState,
    pending: Option<TaskHandle>,
    generation: u64,
    listener: Option<ToastListener>,
}

#[derive(Clone)]
pub struct ToastController {
    scheduler: Rc<dyn Scheduler>,
    dismiss_delay: Duration,
    inner: Rc<RefCell<Inner>>,
}

impl std::fmt::Debug for ToastController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ToastController")
            .field("dismiss_delay", &self.dismiss_delay)
            .field("state", &inner.state)
            .field("generation", &inner.generation)
            .field("pending", &inner.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl ToastController {
    pub fn new(scheduler: Rc<dyn Scheduler>, dismiss_delay: Duration) -> Self {
        Self { scheduler, dismiss_delay, inner: Rc::new(RefCell::new(Inner::default())) }
    }

    /// Replace the change listener. Called with a snapshot after every change.
    pub fn set_listener(&self, listener: impl Fn(&ToastState) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.inner.borrow().state.clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().state.is_visible()
    }

    #[must_use]
    pub fn has_pending_dismiss(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    #[must_use]
    pub fn dismiss_delay(&self) -> Duration {
        self.dismiss_delay
    }

    /// Show `message` with `status`, replacing whatever is on screen, and
    /// restart the auto-dismiss countdown.
    pub fn toast(&self, message: &str, status: impl Into<ToastStatus>) {
        let status = status.into();
        log::debug!("toast: status={status} len={}", message.len());

        let (previous, generation) = {
            let mut inner = self.inner.borrow_mut();
            inner.state.show(message, status);
            inner.generation += 1;
            (inner.pending.take(), inner.generation)
        };
        if let Some(task) = previous {
            task.cancel();
        }

        let weak = Rc::downgrade(&self.inner);
        match self.scheduler.schedule(self.dismiss_delay, Box::new(move || dismiss(&weak, generation))) {
            Ok(task) => self.inner.borrow_mut().pending = Some(task),
            Err(err) => log::warn!("toast auto-dismiss not scheduled: {err}"),
        }

        notify(&self.inner);
    }

    pub fn show_information_toast(&self, message: &str) {
        self.toast(message, ToastStatus::Information);
    }

    pub fn show_success_toast(&self, message: &str) {
        self.toast(message, ToastStatus::Success);
    }

    pub fn show_warning_toast(&self, message: &str) {
        self.toast(message, ToastStatus::Warning);
    }

    pub fn show_error_toast(&self, message: &str) {
        self.toast(message, ToastStatus::Error);
    }

    /// Hide immediately and cancel the pending dismiss.
    pub fn close(&self) {
        log::debug!("toast closed");
        let previous = {
            let mut inner = self.inner.borrow_mut();
            inner.state.hide();
            inner.generation += 1;
            inner.pending.take()
        };
        if let Some(task) = previous {
            task.cancel();
        }
        notify(&self.inner);
    }
}

fn dismiss(inner: &Weak<RefCell<Inner>>, generation: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let fired = {
        let mut guard = inner.borrow_mut();
        if guard.generation != generation {
            log::debug!("stale toast dismiss ignored (gen {generation}, current {})", guard.generation);
            return;
        }
        guard.state.hide();
        guard.pending.take()
    };
    // The task has already run; releasing the handle is all that is left.
    drop(fired);
    log::debug!("toast auto-dismissed");
    notify(&inner);
}

fn notify(inner: &Rc<RefCell<Inner>>) {
    let (listener, snapshot) = {
        let guard = inner.borrow();
        (guard.listener.clone(), guard.state.clone())
    };
    if let Some(listener) = listener {
        listener(&snapshot);
    }
}
