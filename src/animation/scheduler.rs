//! One-shot timer capability interface.
//!
//! The delayed latch transition needs a single deferred callback. The host's
//! event loop implements [`Scheduler`]; the core wraps every scheduled
//! callback in a [`TimerGuard`] check so a timer that outlives the instance
//! fires as a no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Supplier of one-shot deferred callbacks on the host's event loop.
///
/// Callbacks run interleaved with, never concurrent to, the host's other
/// event handlers.
pub trait Scheduler: Send + Sync {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>);
}

/// Cancellation flag shared between a scheduled callback and its owner.
///
/// Cancelling does not unschedule the callback; it makes the eventual firing
/// a no-op.
#[derive(Clone, Debug, Default)]
pub struct TimerGuard {
    cancelled: Arc<AtomicBool>,
}

impl TimerGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
