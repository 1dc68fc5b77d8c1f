//! Repeating-callback scheduling
//!
//! The controller is the only client of a [`Scheduler`]. Ticks produced by a
//! registration are delivered back to the controller as
//! [`Event::Tick`](crate::events::Event::Tick) carrying the registration's handle.

pub mod tokio_scheduler;

use std::{fmt, time::Duration};

pub use tokio_scheduler::TokioScheduler;

/// Opaque reference to one repeating registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a raw registration id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw registration id
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Register and cancel repeating callbacks
pub trait Scheduler {
    /// Start a registration that ticks every `period` until cancelled
    fn register(&mut self, period: Duration) -> TimerHandle;

    /// Stop a registration; unknown or already-cancelled handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}
