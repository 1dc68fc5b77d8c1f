//! Control events and the event stream consumed by the event loop

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::scheduler::TimerHandle;

/// The three user-originated triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlEvent {
    Start,
    Pause,
    Reset,
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlEvent::Start => "start",
            ControlEvent::Pause => "pause",
            ControlEvent::Reset => "reset",
        })
    }
}

/// Everything the event loop can receive, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Control(ControlEvent),
    /// One firing of the registration identified by the handle
    Tick(TimerHandle),
    /// Log a status snapshot
    Status,
    /// Leave the event loop
    Quit,
    /// Input ended before any control was read, with nothing running
    ControlsUnavailable,
}

impl FromStr for Event {
    type Err = String;

    /// Parse one line of user input
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim().to_ascii_lowercase().as_str() {
            "s" | "start" => Ok(Event::Control(ControlEvent::Start)),
            "p" | "pause" => Ok(Event::Control(ControlEvent::Pause)),
            "r" | "reset" => Ok(Event::Control(ControlEvent::Reset)),
            "status" => Ok(Event::Status),
            "q" | "quit" | "exit" => Ok(Event::Quit),
            other => Err(format!("Unknown command: {:?}", other)),
        }
    }
}
