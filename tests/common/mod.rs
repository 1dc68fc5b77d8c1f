//! Fakes for driving the controller without a terminal or a runtime

#![allow(dead_code)]

use std::{collections::BTreeSet, time::Duration};

use stopwatch_widget::{DisplaySurface, Scheduler, TimerHandle};

/// Records every render and paused toggle
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub renders: Vec<String>,
    pub paused: bool,
}

impl RecordingDisplay {
    pub fn last(&self) -> &str {
        self.renders.last().map(String::as_str).unwrap_or("")
    }
}

impl DisplaySurface for RecordingDisplay {
    fn render(&mut self, text: &str) {
        self.renders.push(text.to_string());
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

/// Scheduler whose ticks are fired by hand
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pub active: BTreeSet<TimerHandle>,
    pub registered: Vec<(TimerHandle, Duration)>,
    pub cancelled: Vec<TimerHandle>,
}

impl Scheduler for ManualScheduler {
    fn register(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.active.insert(handle);
        self.registered.push((handle, period));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.active.remove(&handle) {
            self.cancelled.push(handle);
        }
    }
}
