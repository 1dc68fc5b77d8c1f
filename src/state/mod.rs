//! State management module
//!
//! This module contains the stopwatch's owned state and the snapshot it
//! exposes to the host.

pub mod status;
pub mod stopwatch_state;

// Re-export main types
pub use status::StatusSnapshot;
pub use stopwatch_state::StopwatchState;
