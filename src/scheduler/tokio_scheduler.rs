//! Scheduler backed by tokio interval tasks

use std::{collections::HashMap, time::Duration};

use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::{debug, warn};

use super::{Scheduler, TimerHandle};
use crate::events::Event;

/// Spawns one interval task per registration; each tick is posted to the event channel
#[derive(Debug)]
pub struct TokioScheduler {
    events: UnboundedSender<Event>,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Create a scheduler that posts ticks onto `events`
    pub fn new(events: UnboundedSender<Event>) -> Self {
        Self {
            events,
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    /// Number of registrations that have not been cancelled
    pub fn active_registrations(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn register(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;

        let events = self.events.clone();
        let task = tokio::spawn(async move {
            // The first tick lands one full period after registration
            let mut interval = interval_at(Instant::now() + period, period);

            loop {
                interval.tick().await;
                if events.send(Event::Tick(handle)).is_err() {
                    warn!("Event channel closed, stopping {}", handle);
                    break;
                }
            }
        });

        debug!("Registered {} every {:?}", handle, period);
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        match self.tasks.remove(&handle) {
            Some(task) => {
                task.abort();
                debug!("Cancelled {}", handle);
            }
            None => debug!("Cancel of inactive {} ignored", handle),
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
