//! Stopwatch Widget - a terminal-hosted stopwatch with start, pause and reset
//!
//! This library provides the stopwatch controller, its display and scheduling
//! collaborators, and the background tasks that drive them from user input.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod events;
pub mod format;
pub mod scheduler;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, OutputMode};
pub use controller::{ControllerBuilder, StopwatchController};
pub use display::DisplaySurface;
pub use error::{FormatError, SetupError};
pub use events::{ControlEvent, Event};
pub use format::{format_hms, parse_hms, TICK_PERIOD};
pub use scheduler::{Scheduler, TimerHandle, TokioScheduler};
pub use state::{StatusSnapshot, StopwatchState};
pub use utils::signals::shutdown_signal;
