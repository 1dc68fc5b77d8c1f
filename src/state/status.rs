//! Status snapshot handed to the host

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StopwatchState;
use crate::events::ControlEvent;

/// Point-in-time view of the stopwatch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub display: String,
    pub elapsed_seconds: u64,
    pub running: bool,
    pub paused: bool,
    pub last_action: Option<ControlEvent>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub uptime: String,
}

impl StatusSnapshot {
    /// Build a snapshot from the owned state and the running flag
    pub fn capture(state: &StopwatchState, running: bool) -> Self {
        Self {
            display: state.display_text(),
            elapsed_seconds: state.elapsed_seconds,
            running,
            paused: state.paused,
            last_action: state.last_action,
            last_action_time: state.last_action_time,
            uptime: state.uptime(),
        }
    }
}
